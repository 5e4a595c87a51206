//! Page resource and webview preference types.

use serde::{Deserialize, Serialize};

/// Where the local page lives.
///
/// `assets_dir` is resolved against the working directory when relative and
/// is served under the `lumen://` custom protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub assets_dir: String,
    /// Page loaded at startup, relative to `assets_dir`.
    pub entry: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".into(),
            entry: "index.html".into(),
        }
    }
}

/// Webview preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewPrefs {
    /// Allow the web inspector to be opened.
    pub devtools: bool,
    pub clipboard: bool,
    pub autoplay: bool,
    pub transparent: bool,
    pub user_agent: Option<String>,
}

impl Default for WebViewPrefs {
    fn default() -> Self {
        Self {
            devtools: true,
            clipboard: true,
            autoplay: false,
            transparent: false,
            user_agent: None,
        }
    }
}
