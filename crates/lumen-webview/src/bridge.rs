//! The page bridge: the only host capabilities a page may use.
//!
//! The bridge is an initialization script, so it runs before any page
//! script. It exposes one global object with exactly two members:
//!
//! - `onDevToolsOpen(handler)` runs `handler()` on every `devtools-open`
//! - `requestDevTools()` posts `request-devtools` to the host
//!
//! Host -> page delivery goes through a gate function that the host calls
//! via `evaluate_script`. The gate only runs listeners when called with the
//! webview's [`BridgeKey`], which lives in the bridge closure and never on
//! `window`. Page -> host goes through wry's `window.ipc.postMessage`,
//! captured inside the bridge closure.
//!
//! The bridge also forwards trusted shortcut key presses (modifier chords
//! and function keys) to the host, so menu accelerators keep working while
//! the webview holds keyboard focus. Those messages carry the key too.

use std::fmt;

use lumen_common::{IsolationMode, LumenError, Signal, SignalDirection};

use crate::ipc::KEY_PRESS_KIND;

/// Name of the gate function the host calls to deliver a signal.
pub const EMIT_FN: &str = "__lumenEmit";

/// Per-webview secret shared by the bridge script and the host.
///
/// Calls into the page and shortcut messages from the page must carry it,
/// so page scripts cannot fake either direction.
#[derive(Clone, PartialEq, Eq)]
pub struct BridgeKey(String);

impl BridgeKey {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, candidate: Option<&str>) -> bool {
        candidate == Some(self.0.as_str())
    }
}

impl fmt::Debug for BridgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BridgeKey(..)")
    }
}

/// What a bridge member does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Registers a page callback for a host -> page signal.
    Subscribe,
    /// Sends a page -> host signal.
    Send,
}

/// One function on the page-exposed bridge object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeMember {
    pub name: &'static str,
    pub kind: MemberKind,
    pub signal: Signal,
}

/// The complete page-visible surface.
pub const BRIDGE_MEMBERS: [BridgeMember; 2] = [
    BridgeMember {
        name: "onDevToolsOpen",
        kind: MemberKind::Subscribe,
        signal: Signal::DevtoolsOpen,
    },
    BridgeMember {
        name: "requestDevTools",
        kind: MemberKind::Send,
        signal: Signal::RequestDevtools,
    },
];

// Placeholders: __GLOBAL__, __EMIT__, __KEY__, __KEY_PRESS__ (JSON strings),
// __SUBSCRIBE__ / __SEND__ (member names), __OPEN__ / __REQUEST__ (signal names).
const BRIDGE_CORE: &str = r#"
    var ipc = window.ipc;
    var stringify = JSON.stringify;
    var key = __KEY__;
    var post = function (message) {
        try {
            if (ipc && typeof ipc.postMessage === 'function') {
                ipc.postMessage(stringify(message));
            }
        } catch (_) {}
    };
    var send = function (kind) {
        post({ kind: kind, payload: null });
    };
    var listeners = {};
    listeners[__OPEN__] = [];
    var emit = function (kind) {
        var queue = listeners[kind];
        if (!queue) {
            return;
        }
        var snapshot = queue.slice();
        for (var i = 0; i < snapshot.length; i++) {
            try {
                snapshot[i]();
            } catch (err) {
                console.error(err);
            }
        }
    };
    var gate = function (candidate, kind) {
        if (candidate === key) {
            emit(kind);
        }
    };
    var onKeyDown = function (e) {
        if (!e || e.isTrusted !== true) {
            return;
        }
        var name = String(e.key);
        var functionKey = /^F[0-9]{1,2}$/.test(name);
        if (!functionKey && !e.ctrlKey && !e.metaKey && !e.altKey) {
            return;
        }
        post({
            kind: __KEY_PRESS__,
            payload: {
                key: name,
                ctrl: !!e.ctrlKey,
                alt: !!e.altKey,
                shift: !!e.shiftKey,
                meta: !!e.metaKey
            },
            token: key
        });
    };
    if (typeof window.addEventListener === 'function') {
        window.addEventListener('keydown', onKeyDown, true);
    }
    var api = {};
    api.__SUBSCRIBE__ = function (handler) {
        if (typeof handler === 'function') {
            listeners[__OPEN__].push(handler);
        }
    };
    api.__SEND__ = function () {
        send(__REQUEST__);
    };
"#;

const ISOLATED_EXPOSE: &str = r#"
    try {
        delete window.ipc;
    } catch (_) {}
    Object.defineProperty(window, __GLOBAL__, {
        value: Object.freeze(api),
        writable: false,
        configurable: false,
        enumerable: true
    });
    Object.defineProperty(window, __EMIT__, {
        value: gate,
        writable: false,
        configurable: false,
        enumerable: false
    });
"#;

const SHARED_EXPOSE: &str = r#"
    window[__GLOBAL__] = api;
    window[__EMIT__] = gate;
    window.lumen = window.lumen || {};
    window.lumen.ipc = {
        send: function (kind, payload) {
            post({ kind: kind, payload: payload === undefined ? null : payload });
        }
    };
"#;

fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Build the bridge initialization script for `global_name`.
///
/// `global_name` must already be a valid JavaScript identifier.
pub fn bridge_init_script(global_name: &str, isolation: IsolationMode, key: &BridgeKey) -> String {
    let expose = match isolation {
        IsolationMode::Isolated => ISOLATED_EXPOSE,
        IsolationMode::Shared => SHARED_EXPOSE,
    };
    let [subscribe, send] = BRIDGE_MEMBERS;

    let body = format!("{BRIDGE_CORE}{expose}")
        .replace("__GLOBAL__", &js_string(global_name))
        .replace("__EMIT__", &js_string(EMIT_FN))
        .replace("__KEY_PRESS__", &js_string(KEY_PRESS_KIND))
        .replace("__KEY__", &js_string(key.as_str()))
        .replace("__SUBSCRIBE__", subscribe.name)
        .replace("__SEND__", send.name)
        .replace("__OPEN__", &js_string(subscribe.signal.name()))
        .replace("__REQUEST__", &js_string(send.signal.name()));

    format!("(function () {{\n    'use strict';{body}}})();\n")
}

/// JS snippet that delivers a host -> page signal to page listeners.
pub fn js_emit_signal(signal: Signal, key: &BridgeKey) -> String {
    let emit = js_string(EMIT_FN);
    format!(
        "(function () {{ var f = window[{emit}]; if (typeof f === 'function') {{ f({}, {}); }} }})();",
        js_string(key.as_str()),
        js_string(signal.name())
    )
}

/// Anything that can run a script in the page context.
///
/// Implemented by the live webview handle; tests use a recording sink.
pub trait SignalSink {
    fn deliver(&self, script: &str) -> Result<(), LumenError>;

    /// Key the page's bridge was installed with.
    fn bridge_key(&self) -> &BridgeKey;

    /// Send a payload-less host -> page signal.
    fn emit(&self, signal: Signal) -> Result<(), LumenError> {
        if signal.direction() != SignalDirection::HostToPage {
            return Err(LumenError::WebView(format!(
                "signal '{}' cannot be sent to the page",
                signal.name()
            )));
        }
        self.deliver(&js_emit_signal(signal, self.bridge_key()))
    }
}
