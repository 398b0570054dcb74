//! Showcase generation command.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;
use swatch_static::{GenerateConfig, Generator};

/// Configuration file structure (swatch.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    export: ExportConfig,
}

#[derive(Debug, Deserialize)]
struct ExportConfig {
    #[serde(default = "default_output")]
    output: String,
}

// serde field defaults only apply while deserializing; the no-config path goes
// through Default.
impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_output() -> String {
    "output".to_string()
}

/// Load configuration from swatch.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config() -> Result<ConfigFile> {
    let config_path = PathBuf::from("swatch.toml");
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read swatch.toml: {}", e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse swatch.toml: {}", e))?;
        tracing::info!("Loaded config from swatch.toml");
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the generate command.
pub async fn run(output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Generating design assets...");

    let file_config = load_config()?;

    let config = GenerateConfig {
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.export.output)),
    };

    let result = Generator::new(config).run().await?;

    tracing::info!(
        "Wrote {} artifacts in {}ms",
        result.artifacts,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
