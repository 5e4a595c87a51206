//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll menu and webview events (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);
