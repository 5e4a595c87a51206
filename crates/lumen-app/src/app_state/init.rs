//! Window creation, webview setup and menu installation.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use lumen_common::LumenError;
use lumen_config::schema::WindowConfig;
use lumen_config::LumenConfig;
use lumen_platform::MenuTemplate;
use lumen_webview::{page_url, BridgeKey, ContentProvider, WebViewConfig};

use super::core::ShellApp;
use super::menu;
use super::webview_bridge::bounds::window_content_rect;

/// Window attributes for the single shell window.
///
/// The initial size never drops below the configured minimum, and the
/// minimum is also set on the window so resizes below it are refused.
pub(super) fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let min = config.min_size();
    let initial = config.initial_size();
    WindowAttributes::default()
        .with_title(config.title.clone())
        .with_resizable(config.resizable)
        .with_inner_size(LogicalSize::new(initial.width as f64, initial.height as f64))
        .with_min_inner_size(LogicalSize::new(min.width as f64, min.height as f64))
}

/// Webview options derived from the loaded config.
pub(super) fn webview_config(config: &LumenConfig, bridge_key: &BridgeKey) -> WebViewConfig {
    WebViewConfig {
        url: page_url(&config.page.entry),
        global_name: config.bridge.global_name.clone(),
        isolation: config.bridge.isolation,
        bridge_key: bridge_key.clone(),
        transparent: config.webview.transparent,
        devtools: config.webview.devtools,
        user_agent: config.webview.user_agent.clone(),
        clipboard: config.webview.clipboard,
        autoplay: config.webview.autoplay,
    }
}

/// Turn a window-creation result into an optional value, logging failure.
///
/// This is the only place a runtime error is swallowed.
pub(super) fn create_or_log<T>(result: Result<T, LumenError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("Failed to create window: {e}");
            None
        }
    }
}

impl ShellApp {
    /// Create the window, attach the page webview and install the menu.
    ///
    /// Nothing is stored on `self` unless every step succeeds.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), LumenError> {
        let attrs = window_attributes(&self.config.window);
        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| LumenError::Window(e.to_string()))?;

        self.initialize_content();

        let bounds = window_content_rect(&window);
        let webview = self
            .webviews
            .create(&*window, bounds, webview_config(&self.config, &self.bridge_key))
            .map_err(|e| LumenError::WebView(e.to_string()))?;

        let template = MenuTemplate::shell(&self.registry);
        let native_menu = menu::build_menu(&template)?;
        menu::install(&native_menu, &window)?;

        self.webview = Some(webview);
        self.menu = Some(native_menu);
        self.window = Some(window);
        tracing::info!("Window created and page attached");
        Ok(())
    }

    /// Point the `lumen://` protocol at the assets directory.
    fn initialize_content(&mut self) {
        let assets_path = if self.assets_dir.is_absolute() {
            self.assets_dir.clone()
        } else {
            std::env::current_dir()
                .unwrap_or_default()
                .join(&self.assets_dir)
        };

        if !assets_path.join(&self.config.page.entry).is_file() {
            tracing::warn!(
                path = %assets_path.display(),
                entry = %self.config.page.entry,
                "Page entry not found; the window will show an error page"
            );
        }

        self.webviews
            .set_content_provider(ContentProvider::new(&assets_path));
        tracing::info!(assets_dir = %assets_path.display(), "Content provider ready");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_common::IsolationMode;
    use winit::dpi::Size;

    #[test]
    fn default_window_is_800_by_600_with_matching_minimum() {
        let attrs = window_attributes(&WindowConfig::default());
        assert_eq!(attrs.title, "Lumen");
        assert_eq!(
            attrs.inner_size,
            Some(Size::Logical(LogicalSize::new(800.0, 600.0)))
        );
        assert_eq!(
            attrs.min_inner_size,
            Some(Size::Logical(LogicalSize::new(800.0, 600.0)))
        );
    }

    #[test]
    fn initial_size_is_grown_to_minimum() {
        let config = WindowConfig {
            width: 640,
            height: 480,
            ..WindowConfig::default()
        };
        let attrs = window_attributes(&config);
        assert_eq!(
            attrs.inner_size,
            Some(Size::Logical(LogicalSize::new(800.0, 600.0)))
        );
    }

    #[test]
    fn larger_window_keeps_minimum() {
        let config = WindowConfig {
            width: 1280,
            height: 800,
            resizable: false,
            ..WindowConfig::default()
        };
        let attrs = window_attributes(&config);
        assert_eq!(
            attrs.inner_size,
            Some(Size::Logical(LogicalSize::new(1280.0, 800.0)))
        );
        assert_eq!(
            attrs.min_inner_size,
            Some(Size::Logical(LogicalSize::new(800.0, 600.0)))
        );
        assert!(!attrs.resizable);
    }

    #[test]
    fn webview_config_follows_bridge_and_page_sections() {
        let mut config = LumenConfig::default();
        config.page.entry = "home.html".into();
        config.bridge.global_name = "shellAPI".into();
        config.bridge.isolation = IsolationMode::Shared;
        config.webview.devtools = false;

        let wv = webview_config(&config, &BridgeKey::generate());
        assert!(wv.url.ends_with("/home.html"));
        assert_eq!(wv.global_name, "shellAPI");
        assert_eq!(wv.isolation, IsolationMode::Shared);
        assert!(!wv.devtools);
    }

    #[test]
    fn default_webview_config_is_isolated_electron_api() {
        let wv = webview_config(&LumenConfig::default(), &BridgeKey::generate());
        assert_eq!(wv.global_name, "electronAPI");
        assert_eq!(wv.isolation, IsolationMode::Isolated);
        assert!(wv.devtools);
    }

    #[test]
    fn webview_is_built_with_the_app_bridge_key() {
        let key = BridgeKey::generate();
        assert_eq!(webview_config(&LumenConfig::default(), &key).bridge_key, key);
    }

    #[test]
    fn failed_creation_yields_no_handle() {
        let result: Result<u32, LumenError> = Err(LumenError::Window("no display".into()));
        assert_eq!(create_or_log(result), None);
    }

    #[test]
    fn successful_creation_passes_value_through() {
        assert_eq!(create_or_log(Ok::<_, LumenError>(7)), Some(7));
    }
}
