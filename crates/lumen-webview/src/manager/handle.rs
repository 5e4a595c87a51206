use lumen_common::LumenError;
use wry::WebView;

use crate::bridge::{BridgeKey, SignalSink};

/// Handle to the live page webview.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) bridge_key: BridgeKey,
}

impl WebViewHandle {
    /// Set the webview bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Open the inspector. No-op when devtools were disabled at build time.
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    pub fn is_devtools_open(&self) -> bool {
        self.webview.is_devtools_open()
    }
}

impl SignalSink for WebViewHandle {
    fn deliver(&self, script: &str) -> Result<(), LumenError> {
        self.webview
            .evaluate_script(script)
            .map_err(|e| LumenError::WebView(e.to_string()))
    }

    fn bridge_key(&self) -> &BridgeKey {
        &self.bridge_key
    }
}
