use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::{header::CONTENT_TYPE, Response, StatusCode};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::bridge::bridge_init_script;
use crate::content::{self, ContentProvider};

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// URL of a page under the assets directory.
///
/// WebView2 only serves custom protocols through its `http://<scheme>.localhost`
/// rewrite, so Windows gets that form directly.
pub fn page_url(entry: &str) -> String {
    let entry = entry.trim_start_matches('/');
    if cfg!(windows) {
        format!("http://{}.localhost/{entry}", content::SCHEME)
    } else {
        format!("{}://localhost/{entry}", content::SCHEME)
    }
}

impl WebViewManager {
    /// Build the page webview as a child of `window`, positioned at `bounds`.
    ///
    /// The bridge script is installed before any page script runs.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_initialization_script(&bridge_init_script(
                &config.global_name,
                config.isolation,
                &config.bridge_key,
            ));

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));
        builder = Self::attach_title_handler(builder, Arc::clone(&events));
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events));
        builder = self.attach_custom_protocol(builder);

        let webview = builder.with_url(&config.url).build_as_child(window)?;

        debug!(url = %config.url, isolation = ?config.isolation, "webview created");

        Ok(WebViewHandle {
            webview,
            bridge_key: config.bridge_key,
        })
    }

    /// Set the content provider for serving assets via `lumen://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(provider) = &self.content_provider else {
            return builder;
        };
        let cp = Arc::clone(provider);
        builder.with_custom_protocol(content::SCHEME.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = content::request_path(&uri);
            match cp.resolve(path) {
                Some((mime, data)) => asset_response(StatusCode::OK, mime, data),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    asset_response(StatusCode::NOT_FOUND, "text/plain", b"Not Found".to_vec())
                }
            }
        })
    }
}

fn asset_response(status: StatusCode, mime: &str, data: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::Owned(data));
    *response.status_mut() = status;
    if let Ok(value) = mime.parse() {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }
    response
}
