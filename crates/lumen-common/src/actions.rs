use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the shell.
///
/// Menu items and keybinds both resolve to an `Action`; the app state
/// dispatcher matches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Notify the page that devtools were requested from the menu.
    OpenDevtools,
    /// Leave the event loop and exit.
    Quit,
    None,
}

impl Action {
    /// Label shown in the application menu.
    pub fn label(&self) -> &'static str {
        match self {
            Action::OpenDevtools => "Devtools",
            Action::Quit => "Quit App",
            Action::None => "None",
        }
    }

    /// Stable menu item id used to route native menu events back to actions.
    pub fn menu_id(&self) -> &'static str {
        match self {
            Action::OpenDevtools => "browser.devtools",
            Action::Quit => "file.quit",
            Action::None => "none",
        }
    }

    /// Reverse of [`Action::menu_id`].
    pub fn from_menu_id(id: &str) -> Option<Action> {
        match id {
            "browser.devtools" => Some(Action::OpenDevtools),
            "file.quit" => Some(Action::Quit),
            _ => None,
        }
    }
}
