use lumen_common::IsolationMode;

use crate::bridge::BridgeKey;

/// Everything needed to build the page webview.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Global name the bridge object is exposed under.
    pub global_name: String,
    pub isolation: IsolationMode,
    /// Secret shared with the bridge script for this webview.
    pub bridge_key: BridgeKey,
    pub transparent: bool,
    /// Enable the inspector.
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
    pub autoplay: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: super::page_url("index.html"),
            global_name: "electronAPI".to_string(),
            isolation: IsolationMode::Isolated,
            bridge_key: BridgeKey::generate(),
            transparent: false,
            devtools: true,
            user_agent: None,
            clipboard: true,
            autoplay: false,
        }
    }
}
