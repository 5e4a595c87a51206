pub mod input;
pub mod keymap;
pub mod menu;
pub mod winit_keys;

pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{KeyBind, Modifier};
pub use menu::{MenuEntry, MenuGroup, MenuTemplate};
pub use winit_keys::normalize_winit_key;
