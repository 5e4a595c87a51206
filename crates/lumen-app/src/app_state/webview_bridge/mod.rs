//! Bridge between the window and the page webview.
//!
//! Drains webview events, dispatches page IPC, and keeps the webview
//! sized to the window.

pub(super) mod bounds;
mod ipc_dispatch;

use lumen_webview::{PageLoadState, WebViewEvent};

use super::core::ShellApp;

impl ShellApp {
    /// Drain and handle all pending webview events.
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event {
                WebViewEvent::IpcMessage { body } => self.handle_ipc_message(&body),
                WebViewEvent::PageLoad { state, url } => match state {
                    PageLoadState::Started => tracing::debug!(url = %url, "page loading"),
                    PageLoadState::Finished => tracing::info!(url = %url, "page loaded"),
                },
                WebViewEvent::TitleChanged { title } => {
                    tracing::debug!(title = %title, "page title changed");
                }
                WebViewEvent::NavigationRequested { url } => {
                    tracing::debug!(url = %url, "navigation allowed");
                }
            }
        }
    }

    /// Resize the webview to fill the window.
    pub(in crate::app_state) fn sync_webview_bounds(&self) {
        let (Some(window), Some(webview)) = (self.window.as_ref(), self.webview.as_ref()) else {
            return;
        };
        if let Err(e) = webview.set_bounds(bounds::window_content_rect(window)) {
            tracing::warn!("Failed to resize webview: {e}");
        }
    }
}
