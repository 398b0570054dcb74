//! Swatch CLI - design token and component showcase exporter.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(about = "Design token and component showcase exporter")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the token document and component showcase pages
    Generate {
        /// Output directory (defaults to config or "output")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Bundle and minify the theme CSS entry point
    BundleCss {
        /// CSS entry file (defaults to config or "assets/src/main.css")
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Bundle directory (defaults to config or "assets/dist")
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Generate { output } => {
            commands::generate::run(output).await?;
        }
        Commands::BundleCss { input, out_dir } => {
            commands::bundle::run(input, out_dir).await?;
        }
    }

    Ok(())
}
