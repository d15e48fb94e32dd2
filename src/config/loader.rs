//! Configuration loader

use config::{Config, Environment, File, FileFormat};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{Result, TradingError};

/// Prefix for environment overrides, e.g. `COOLDOWN_TRADER__SETTINGS__LOG_LEVEL`
pub const ENV_PREFIX: &str = "COOLDOWN_TRADER";

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with COOLDOWN_TRADER__)
/// 2. Configuration file (TOML format)
/// 3. Default values
///
/// An explicitly named file that does not exist is a configuration error.
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if !Path::new(path).exists() {
            return Err(TradingError::configuration(
                "config",
                format!("file not found: {}", path),
            ));
        }
        builder = builder.add_source(File::new(path, FileFormat::Toml));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    Ok(config.try_deserialize()?)
}

/// Parse configuration from an in-memory TOML document, without environment overrides
pub fn load_from_str(toml: &str) -> Result<AppConfig> {
    let config = Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?;

    Ok(config.try_deserialize()?)
}
