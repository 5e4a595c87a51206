//! Config path resolution.

use lumen_common::ConfigError;
use std::path::{Path, PathBuf};

/// Get the platform-specific default config file path.
///
/// On macOS: `~/Library/Application Support/lumen/config.toml`
/// On Linux: `~/.config/lumen/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("lumen").join("config.toml"))
}

/// The file a config load will read, if any.
///
/// An explicit path is returned as is. The default path is returned only
/// when the file exists, since a missing default means built-in defaults.
pub fn config_source(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().ok().filter(|p| p.exists()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_in_lumen_config() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with("lumen/config.toml"));
        }
    }

    #[test]
    fn explicit_source_wins_even_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert_eq!(config_source(Some(&path)), Some(path));
    }

    #[test]
    fn default_source_only_when_present() {
        let expected = default_config_path().ok().filter(|p| p.exists());
        assert_eq!(config_source(None), expected);
    }
}
