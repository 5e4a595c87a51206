use std::collections::HashMap;

use lumen_common::Action;
use lumen_config::schema::KeybindConfig;

use crate::keymap::{parse_keybind, KeyBind};

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
///
/// Built from [`KeybindConfig`] at startup. The same parsed bindings feed
/// the native menu accelerators, so the menu and the keyboard path agree.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
    keybinds: HashMap<Action, KeyBind>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped. A combo
    /// already bound to another action keeps its first binding.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut keybinds = HashMap::new();

        let mappings: [(&str, Action); 2] = [
            (&config.devtools, Action::OpenDevtools),
            (&config.quit, Action::Quit),
        ];

        for (binding_str, action) in mappings {
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    let combo = KeyCombo::from_keybind(&kb);
                    if let Some(existing) = bindings.get(&combo) {
                        tracing::warn!(
                            "keybind '{binding_str}' for {action:?} already bound to {existing:?}; skipped"
                        );
                        continue;
                    }
                    bindings.insert(combo, action);
                    keybinds.insert(action, kb);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}': {e}");
                }
            }
        }

        Self { bindings, keybinds }
    }

    /// Look up an action for a key combination.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<Action> {
        self.bindings.get(combo).copied()
    }

    /// Parsed binding for an action, if one is configured.
    pub fn keybind_for_action(&self, action: Action) -> Option<&KeyBind> {
        self.keybinds.get(&action)
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
