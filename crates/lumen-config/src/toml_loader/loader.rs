//! Config deserialization from files and strings.

use crate::schema::LumenConfig;
use lumen_common::ConfigError;
use std::path::Path;
use tracing::{debug, info};

use super::paths::default_config_path;

/// Parse a config from TOML text. Missing fields use defaults.
pub fn load_from_str(content: &str) -> Result<LumenConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// The result is not validated here; callers run
/// [`validation::validate`](crate::validation::validate).
pub fn load_from_path(path: &Path) -> Result<LumenConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// Returns defaults when no file exists.
pub fn load_default() -> Result<LumenConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        debug!("no config found at {}, using defaults", path.display());
        return Ok(LumenConfig::default());
    }

    load_from_path(&path)
}
