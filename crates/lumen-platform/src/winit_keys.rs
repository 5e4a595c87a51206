//! Winit key name normalization.
//!
//! Converts winit's `Key` debug representations to the normalized key names
//! used by [`KeyCombo`](crate::input::KeyCombo) and
//! [`parse_keybind`](crate::keymap::parse_keybind).

/// Convert a winit key name to the normalized string used by `KeyCombo`.
///
/// Named keys arrive as their debug names (`"F12"`, `"Escape"`, `"Enter"`),
/// characters arrive as the character itself (`"q"`, `" "`).
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        " " | "Space" => "Space".to_string(),
        _ => {
            if key.chars().count() == 1 {
                key.to_uppercase()
            } else {
                // F1..F24 and other named keys pass through
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_chars_uppercased() {
        assert_eq!(normalize_winit_key("q"), "Q");
        assert_eq!(normalize_winit_key("Q"), "Q");
    }

    #[test]
    fn function_keys_passthrough() {
        assert_eq!(normalize_winit_key("F1"), "F1");
        assert_eq!(normalize_winit_key("F12"), "F12");
    }

    #[test]
    fn space() {
        assert_eq!(normalize_winit_key(" "), "Space");
        assert_eq!(normalize_winit_key("Space"), "Space");
    }

    #[test]
    fn named_keys_passthrough() {
        assert_eq!(normalize_winit_key("Escape"), "Escape");
        assert_eq!(normalize_winit_key("Enter"), "Enter");
    }
}
