//! Payload-less signals crossing the host/page boundary.

use serde::{Deserialize, Serialize};

/// Which side emits a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalDirection {
    HostToPage,
    PageToHost,
}

/// A named, payload-less, fire-and-forget notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// Host tells the page that devtools were selected in the menu.
    DevtoolsOpen,
    /// Page asks the host to open devtools.
    RequestDevtools,
}

impl Signal {
    /// Wire name of the signal.
    pub fn name(&self) -> &'static str {
        match self {
            Signal::DevtoolsOpen => "devtools-open",
            Signal::RequestDevtools => "request-devtools",
        }
    }

    pub fn from_name(name: &str) -> Option<Signal> {
        match name {
            "devtools-open" => Some(Signal::DevtoolsOpen),
            "request-devtools" => Some(Signal::RequestDevtools),
            _ => None,
        }
    }

    pub fn direction(&self) -> SignalDirection {
        match self {
            Signal::DevtoolsOpen => SignalDirection::HostToPage,
            Signal::RequestDevtools => SignalDirection::PageToHost,
        }
    }
}
