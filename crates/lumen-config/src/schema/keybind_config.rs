//! Keyboard accelerator configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Accelerators for the menu actions.
///
/// Format: "Modifier+Key" where Modifier is one of Cmd, Ctrl, Alt/Option,
/// Shift, Super. `Cmd` means Command on macOS and Ctrl elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub devtools: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            devtools: "F12".into(),
            quit: "Cmd+Q".into(),
        }
    }
}
