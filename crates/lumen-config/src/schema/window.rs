//! Window configuration types.

use lumen_common::Size;
use serde::{Deserialize, Serialize};

/// Top-level window settings.
///
/// The window never opens or resizes below `min_width` x `min_height`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Lumen".into(),
            width: 800,
            height: 600,
            min_width: 800,
            min_height: 600,
            resizable: true,
        }
    }
}

impl WindowConfig {
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Requested size, grown to the minimum if the file asks for less.
    pub fn initial_size(&self) -> Size {
        Size::new(self.width, self.height).at_least(self.min_size())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Lumen");
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.min_width, 800);
        assert_eq!(config.min_height, 600);
        assert!(config.resizable);
    }

    #[test]
    fn initial_size_respects_minimum() {
        let config = WindowConfig {
            width: 400,
            height: 900,
            ..Default::default()
        };
        assert_eq!(config.initial_size(), Size::new(800, 900));
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "Docs"
width = 1024
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Docs");
        assert_eq!(config.width, 1024);
        // Defaults preserved
        assert_eq!(config.height, 600);
        assert_eq!(config.min_size(), Size::new(800, 600));
    }
}
