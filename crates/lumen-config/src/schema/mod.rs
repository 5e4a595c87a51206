//! Configuration schema.
//!
//! Every struct uses `#[serde(default)]`, so a config file only needs the
//! fields it wants to override.

mod bridge;
mod keybind_config;
mod page;
mod system;
mod window;

pub use bridge::BridgeConfig;
pub use keybind_config::KeybindConfig;
pub use page::{PageConfig, WebViewPrefs};
pub use system::{LogLevel, LoggingConfig};
pub use window::WindowConfig;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LumenConfig {
    pub window: WindowConfig,
    pub page: PageConfig,
    pub bridge: BridgeConfig,
    pub webview: WebViewPrefs,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_common::IsolationMode;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: LumenConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.bridge.isolation, IsolationMode::Isolated);
        assert_eq!(config.page.entry, "index.html");
    }

    #[test]
    fn partial_toml_keeps_other_sections() {
        let toml_str = r#"
[window]
width = 1280

[bridge]
isolation = "shared"
"#;
        let config: LumenConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.min_width, 800);
        assert_eq!(config.bridge.isolation, IsolationMode::Shared);
        assert_eq!(config.keybinds.quit, "Cmd+Q");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn unknown_isolation_mode_is_rejected() {
        let result: Result<LumenConfig, _> = toml::from_str("[bridge]\nisolation = \"open\"\n");
        assert!(result.is_err());
    }
}
