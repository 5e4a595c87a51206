//! Page -> host IPC messages.
//!
//! The bridge posts `JSON.stringify({kind, payload, token?})` through
//! `window.ipc.postMessage`. Two kinds are accepted: page -> host signals
//! with an empty payload, and forwarded shortcut key presses, which must
//! carry the webview's bridge key as `token`.

use lumen_common::{Signal, SignalDirection};
use serde::{Deserialize, Serialize};

use crate::bridge::BridgeKey;

/// Kind the bridge uses for forwarded key presses.
pub const KEY_PRESS_KIND: &str = "key-press";

/// Allowed IPC message kinds from JavaScript.
pub const ALLOWED_IPC_KINDS: &[&str] = &["request-devtools", KEY_PRESS_KIND];

/// A raw IPC message from JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
    #[serde(default)]
    pub token: Option<String>,
}

/// A key press the page saw while it had keyboard focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    /// DOM `KeyboardEvent.key`.
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
}

/// An accepted page message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMessage {
    Signal(Signal),
    KeyPress(KeyPress),
}

/// Why an IPC message was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpcRejection {
    Malformed,
    UnknownKind(String),
    UnexpectedPayload(String),
    Unauthenticated(String),
}

impl std::fmt::Display for IpcRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpcRejection::Malformed => write!(f, "malformed message"),
            IpcRejection::UnknownKind(kind) => write!(f, "unknown kind '{kind}'"),
            IpcRejection::UnexpectedPayload(kind) => {
                write!(f, "message '{kind}' has an unexpected payload")
            }
            IpcRejection::Unauthenticated(kind) => {
                write!(f, "message '{kind}' has a missing or wrong token")
            }
        }
    }
}

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Resolve a raw body to the page message it carries.
    pub fn parse(raw: &str, key: &BridgeKey) -> Result<PageMessage, IpcRejection> {
        let msg = Self::from_json(raw).ok_or(IpcRejection::Malformed)?;

        if !is_ipc_kind_allowed(&msg.kind) {
            return Err(IpcRejection::UnknownKind(msg.kind));
        }

        if msg.kind == KEY_PRESS_KIND {
            if !key.matches(msg.token.as_deref()) {
                return Err(IpcRejection::Unauthenticated(msg.kind));
            }
            return serde_json::from_value(msg.payload)
                .map(PageMessage::KeyPress)
                .map_err(|_| IpcRejection::UnexpectedPayload(msg.kind));
        }

        let signal = match Signal::from_name(&msg.kind) {
            Some(s) if s.direction() == SignalDirection::PageToHost => s,
            _ => return Err(IpcRejection::UnknownKind(msg.kind)),
        };

        if !msg.payload.is_null() {
            return Err(IpcRejection::UnexpectedPayload(msg.kind));
        }

        Ok(PageMessage::Signal(signal))
    }
}
