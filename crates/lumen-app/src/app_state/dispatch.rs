//! Action dispatch: routes resolved actions to the page or the event loop.

use lumen_common::{Action, Signal};
use lumen_webview::SignalSink;

use super::core::ShellApp;

/// Deliver `devtools-open` to the page, if one is attached.
///
/// Returns whether a script was handed to the page.
pub(super) fn notify_devtools_open<S: SignalSink>(sink: Option<&S>) -> bool {
    let Some(sink) = sink else {
        tracing::debug!("devtools-open dropped: no page attached");
        return false;
    };
    match sink.emit(Signal::DevtoolsOpen) {
        Ok(()) => {
            tracing::debug!("devtools-open sent to page");
            true
        }
        Err(e) => {
            tracing::warn!("devtools-open not delivered: {e}");
            false
        }
    }
}

impl ShellApp {
    /// Dispatch a resolved [`Action`].
    pub(super) fn dispatch(&mut self, action: Action) {
        match action {
            Action::OpenDevtools => {
                notify_devtools_open(self.webview.as_ref());
            }
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }
            Action::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::core::test_support::app;
    use lumen_common::LumenError;
    use lumen_webview::BridgeKey;
    use std::cell::RefCell;

    struct RecordingSink {
        key: BridgeKey,
        scripts: RefCell<Vec<String>>,
    }

    impl Default for RecordingSink {
        fn default() -> Self {
            Self {
                key: BridgeKey::generate(),
                scripts: RefCell::new(Vec::new()),
            }
        }
    }

    impl SignalSink for RecordingSink {
        fn deliver(&self, script: &str) -> Result<(), LumenError> {
            self.scripts.borrow_mut().push(script.to_string());
            Ok(())
        }

        fn bridge_key(&self) -> &BridgeKey {
            &self.key
        }
    }

    struct BrokenSink(BridgeKey);

    impl SignalSink for BrokenSink {
        fn deliver(&self, _script: &str) -> Result<(), LumenError> {
            Err(LumenError::WebView("page gone".into()))
        }

        fn bridge_key(&self) -> &BridgeKey {
            &self.0
        }
    }

    #[test]
    fn each_activation_sends_one_signal() {
        let sink = RecordingSink::default();
        assert!(notify_devtools_open(Some(&sink)));
        assert!(notify_devtools_open(Some(&sink)));
        let scripts = sink.scripts.borrow();
        assert_eq!(scripts.len(), 2);
        assert!(scripts.iter().all(|s| s.contains("\"devtools-open\"")));
        assert!(scripts.iter().all(|s| s.contains(sink.key.as_str())));
    }

    #[test]
    fn missing_page_drops_signal() {
        assert!(!notify_devtools_open(None::<&RecordingSink>));
    }

    #[test]
    fn delivery_failure_is_not_fatal() {
        assert!(!notify_devtools_open(Some(&BrokenSink(BridgeKey::generate()))));
    }

    #[test]
    fn quit_requests_exit() {
        let mut app = app();
        app.dispatch(Action::Quit);
        assert!(app.should_exit);
    }

    #[test]
    fn devtools_does_not_exit_or_create_a_window() {
        let mut app = app();
        app.dispatch(Action::OpenDevtools);
        assert!(!app.should_exit);
        assert!(app.window.is_none());
    }

    #[test]
    fn none_action_is_ignored() {
        let mut app = app();
        app.dispatch(Action::None);
        assert!(!app.should_exit);
    }
}
