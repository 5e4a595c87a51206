//! Lumen configuration system.
//!
//! TOML-based configuration with full validation. Every section uses
//! defaults so partial configs (or no config file at all) work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lumen_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}x{}", config.window.width, config.window.height);
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LumenConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use lumen_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// A missing file yields the default config; nothing is written to disk.
pub fn load_config() -> Result<LumenConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
///
/// Unlike [`load_config`], a missing file is an error.
pub fn load_config_from(path: &Path) -> Result<LumenConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
