//! Configuration loading.
//!
//! The config is a YAML file deserialized into [`TheaterConfig`]. Every field
//! is optional; missing fields keep their defaults.

use anyhow::{Context, Result};
use shared::TheaterConfig;
use std::path::Path;
use tracing::info;

/// Environment variable naming the YAML config file
pub const CONFIG_PATH_ENV: &str = "THEATER_CONFIG";

/// Load from the file named by `THEATER_CONFIG`, or use defaults if it is unset
pub fn load_config() -> Result<TheaterConfig> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => load_config_from_path(Path::new(&path)),
        None => {
            info!("{} not set, using default configuration", CONFIG_PATH_ENV);
            Ok(TheaterConfig::default())
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<TheaterConfig> {
    info!("Loading configuration from {}", path.display());

    let yaml_content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: TheaterConfig = serde_yaml::from_str(&yaml_content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    Ok(config)
}
