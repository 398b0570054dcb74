//! CSS bundling command.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;
use swatch_static::AssetPipeline;

/// Bundle section of swatch.toml.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    bundle: BundleConfig,
}

#[derive(Debug, Deserialize)]
struct BundleConfig {
    #[serde(default = "default_input")]
    input: String,
    #[serde(default = "default_out_dir")]
    out_dir: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            out_dir: default_out_dir(),
        }
    }
}

fn default_input() -> String {
    "assets/src/main.css".to_string()
}

fn default_out_dir() -> String {
    "assets/dist".to_string()
}

fn load_config() -> Result<ConfigFile> {
    let config_path = PathBuf::from("swatch.toml");
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read swatch.toml: {}", e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse swatch.toml: {}", e))?;
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the bundle-css command.
pub async fn run(input: Option<PathBuf>, out_dir: Option<PathBuf>) -> Result<()> {
    let file_config = load_config()?;

    let entry = input.unwrap_or_else(|| PathBuf::from(&file_config.bundle.input));
    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(&file_config.bundle.out_dir));

    tracing::info!("Bundling {}...", entry.display());

    let out_path = AssetPipeline::bundle(&entry, &out_dir)?;

    tracing::info!("Output: {}", out_path.display());

    Ok(())
}
