//! Declarative application menu.
//!
//! The template is plain data so it can be built and checked without a
//! windowing backend; the app turns it into native menu items.

use lumen_common::Action;

use crate::input::KeybindRegistry;
use crate::keymap::to_accelerator;

/// A clickable menu item bound to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub action: Action,
    pub label: &'static str,
    /// Accelerator in native menu syntax, e.g. `"F12"` or `"Ctrl+Q"`.
    pub accelerator: Option<String>,
}

/// A top-level menu group ("Browser", "File").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub label: &'static str,
    pub entries: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTemplate {
    pub groups: Vec<MenuGroup>,
}

impl MenuTemplate {
    /// The shell menu: Browser → Devtools, File → Quit App.
    pub fn shell(registry: &KeybindRegistry) -> Self {
        let entry = |action: Action| MenuEntry {
            action,
            label: action.label(),
            accelerator: registry.keybind_for_action(action).map(to_accelerator),
        };

        Self {
            groups: vec![
                MenuGroup {
                    label: "Browser",
                    entries: vec![entry(Action::OpenDevtools)],
                },
                MenuGroup {
                    label: "File",
                    entries: vec![entry(Action::Quit)],
                },
            ],
        }
    }

    /// All entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }
}
