//! ShellApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use lumen_config::LumenConfig;
use lumen_platform::KeybindRegistry;
use lumen_webview::{BridgeKey, WebViewHandle, WebViewManager};

/// Top-level application state.
///
/// Fields drop in declaration order, so the webview and menu go before the
/// window they are attached to.
pub struct ShellApp {
    pub(super) config: LumenConfig,
    pub(super) registry: KeybindRegistry,
    pub(super) assets_dir: PathBuf,

    // Page
    pub(super) bridge_key: BridgeKey,
    pub(super) webviews: WebViewManager,
    pub(super) webview: Option<WebViewHandle>,

    // Native menu (kept alive for the process lifetime)
    pub(super) menu: Option<muda::Menu>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Set once `resumed` has tried to build the window
    pub(super) init_attempted: bool,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl ShellApp {
    pub fn new(config: LumenConfig, registry: KeybindRegistry, assets_dir: PathBuf) -> Self {
        Self {
            config,
            registry,
            assets_dir,
            bridge_key: BridgeKey::generate(),
            webviews: WebViewManager::new(),
            webview: None,
            menu: None,
            window: None,
            init_attempted: false,
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::app;

    #[test]
    fn new_app_has_no_window_or_webview() {
        let app = app();
        assert!(app.window.is_none());
        assert!(app.webview.is_none());
        assert!(app.menu.is_none());
        assert!(!app.init_attempted);
        assert!(!app.should_exit);
    }

    #[test]
    fn registry_holds_both_accelerators() {
        assert_eq!(app().registry.len(), 2);
    }
}
