//! WebView host for the Lumen shell.
//!
//! Wraps the `wry` crate to provide:
//! - The single page webview and its handle
//! - The page bridge (`electronAPI` by default) installed before page scripts
//! - Page-to-host IPC validation, including forwarded shortcut keys
//! - A `lumen://` custom protocol serving the local assets directory
//! - Navigation restricted to local content

pub mod bridge;
pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;

pub use bridge::{BridgeKey, BridgeMember, MemberKind, SignalSink, BRIDGE_MEMBERS};
pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcRejection, KeyPress, PageMessage};
pub use manager::{page_url, WebViewConfig, WebViewHandle, WebViewManager};
