//! Page webview lifecycle.
//!
//! `WebViewManager` builds the single page webview and collects the events
//! its callbacks report. The host drains those events once per poll.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use lifecycle::page_url;
pub use types::WebViewConfig;

/// Owns the event queue shared with webview callbacks.
pub struct WebViewManager {
    /// Events are pushed here by wry callbacks for the event loop to consume.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Serves the `lumen://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::PageLoadState;

    #[test]
    fn drain_returns_events_in_order_and_empties_queue() {
        let manager = WebViewManager::new();
        manager.push_event(WebViewEvent::PageLoad {
            state: PageLoadState::Started,
            url: "lumen://localhost/index.html".into(),
        });
        manager.push_event(WebViewEvent::IpcMessage {
            body: r#"{"kind":"request-devtools"}"#.into(),
        });

        let drained = manager.drain_events();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], WebViewEvent::PageLoad { .. }));
        assert!(matches!(drained[1], WebViewEvent::IpcMessage { .. }));
        assert!(manager.drain_events().is_empty());
    }
}
