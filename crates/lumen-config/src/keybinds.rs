//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use lumen_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![("devtools", &config.devtools), ("quit", &config.quit)]
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Comparison ignores case, whitespace, modifier order and modifier
/// aliases, so `"Cmd+Q"`, `"ctrl + q"` and `"Q+Control"` off macOS all
/// count as the same binding.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in all_keybinds(config) {
        let key = canonical(binding);
        if let Some(existing_name) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(key, name);
    }

    Ok(())
}

fn canonical_modifier(token: &str) -> &str {
    match token {
        "cmd" | "command" | "cmdorctrl" | "commandorcontrol" => {
            if cfg!(target_os = "macos") {
                "super"
            } else {
                "ctrl"
            }
        }
        "control" => "ctrl",
        "option" | "opt" => "alt",
        "win" | "meta" => "super",
        other => other,
    }
}

fn canonical(binding: &str) -> String {
    let mut tokens: Vec<String> = binding
        .split('+')
        .map(|t| t.trim().to_lowercase())
        .collect();
    let key = tokens.pop().unwrap_or_default();
    let mut mods: Vec<&str> = tokens.iter().map(|t| canonical_modifier(t)).collect();
    mods.sort_unstable();
    mods.dedup();
    mods.push(&key);
    mods.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keybinds_have_no_duplicates() {
        assert!(validate_no_duplicates(&KeybindConfig::default()).is_ok());
    }

    #[test]
    fn all_keybinds_has_correct_names() {
        let config = KeybindConfig::default();
        let names: Vec<&str> = all_keybinds(&config).iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["devtools", "quit"]);
    }

    #[test]
    fn detects_duplicate_keybinds() {
        let config = KeybindConfig {
            devtools: "Cmd+Q".into(),
            quit: "cmd + q".into(),
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("devtools"));
        assert!(err.contains("quit"));
    }

    #[test]
    fn detects_alias_duplicates() {
        let config = KeybindConfig {
            devtools: "CmdOrCtrl+Q".into(),
            quit: if cfg!(target_os = "macos") {
                "Super+Q".into()
            } else {
                "Control+Q".into()
            },
        };
        assert!(validate_no_duplicates(&config).is_err());
    }

    #[test]
    fn modifier_order_does_not_matter() {
        let config = KeybindConfig {
            devtools: "Shift+Alt+I".into(),
            quit: "option + shift + i".into(),
        };
        assert!(validate_no_duplicates(&config).is_err());
    }

    #[test]
    fn different_keys_with_aliases_are_distinct() {
        let config = KeybindConfig {
            devtools: "Cmd+Shift+I".into(),
            quit: "Command+Q".into(),
        };
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn canonical_form_sorts_and_lowercases() {
        assert_eq!(canonical(" Shift + Control + Q "), "ctrl+shift+q");
        assert_eq!(canonical("F12"), "f12");
        assert_eq!(canonical("Win+Opt+K"), "alt+super+k");
    }
}
