//! Page -> host IPC dispatch.

use lumen_common::Signal;
use lumen_platform::{normalize_winit_key, KeyCombo};
use lumen_webview::{IpcMessage, KeyPress, PageMessage};

use crate::app_state::core::ShellApp;

/// What the host does with a `request-devtools` from the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DevtoolsRequest {
    Open,
    AlreadyOpen,
    Disabled,
    NoPage,
}

pub(super) fn devtools_request_outcome(
    allowed: bool,
    has_page: bool,
    already_open: bool,
) -> DevtoolsRequest {
    if !allowed {
        DevtoolsRequest::Disabled
    } else if !has_page {
        DevtoolsRequest::NoPage
    } else if already_open {
        DevtoolsRequest::AlreadyOpen
    } else {
        DevtoolsRequest::Open
    }
}

/// The macOS menu bar receives key equivalents the page leaves unhandled,
/// so forwarded presses would fire its actions twice.
pub(super) const MENU_SEES_PAGE_KEYS: bool = cfg!(target_os = "macos");

/// Key combo for a key press the page forwarded.
///
/// DOM key names match winit's logical key names, and `meta` is the
/// Command key on macOS and the Windows key elsewhere.
pub(super) fn page_key_combo(press: &KeyPress) -> KeyCombo {
    KeyCombo::from_winit(
        press.ctrl,
        press.alt,
        press.shift,
        press.meta,
        normalize_winit_key(&press.key),
    )
}

impl ShellApp {
    /// Handle a single IPC body from the page.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, body: &str) {
        match IpcMessage::parse(body, &self.bridge_key) {
            Ok(PageMessage::Signal(Signal::RequestDevtools)) => self.handle_devtools_request(),
            Ok(PageMessage::Signal(other)) => {
                tracing::warn!(signal = other.name(), "IPC signal has no host handler");
            }
            Ok(PageMessage::KeyPress(press)) => {
                if MENU_SEES_PAGE_KEYS {
                    tracing::trace!(key = %press.key, "page key left to the menu bar");
                } else {
                    self.dispatch_combo(&page_key_combo(&press));
                }
            }
            Err(rejection) => {
                tracing::warn!(
                    body_len = body.len(),
                    "IPC message rejected: {rejection}"
                );
            }
        }
    }

    fn handle_devtools_request(&self) {
        let webview = self.webview.as_ref();
        let outcome = devtools_request_outcome(
            self.config.bridge.allow_devtools_request,
            webview.is_some(),
            webview.is_some_and(|w| w.is_devtools_open()),
        );

        match (outcome, webview) {
            (DevtoolsRequest::Open, Some(w)) => {
                tracing::info!("Opening devtools at page request");
                w.open_devtools();
            }
            (DevtoolsRequest::Disabled, _) => {
                tracing::info!("request-devtools ignored: disabled by bridge.allow_devtools_request");
            }
            (outcome, _) => tracing::debug!(?outcome, "request-devtools handled"),
        }
    }
}
