//! Bridge and page validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::LumenConfig;

static JS_IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Global names the bridge must never shadow.
const RESERVED_GLOBALS: &[&str] = &["window", "document", "ipc", "globalThis", "self", "top"];

pub(crate) fn validate_bridge(errors: &mut Vec<String>, config: &LumenConfig) {
    let name = &config.bridge.global_name;
    if !JS_IDENTIFIER_RE.is_match(name) {
        errors.push(format!(
            "bridge.global_name = '{name}' is not a valid JavaScript identifier"
        ));
    } else if RESERVED_GLOBALS.contains(&name.as_str()) {
        errors.push(format!("bridge.global_name = '{name}' is reserved"));
    }
}

pub(crate) fn validate_page(errors: &mut Vec<String>, config: &LumenConfig) {
    let entry = config.page.entry.trim();
    if entry.is_empty() {
        errors.push("page.entry must not be empty".into());
    } else if entry.split(['/', '\\']).any(|segment| segment == "..") {
        errors.push(format!("page.entry = '{entry}' escapes the assets directory"));
    }
    if config.page.assets_dir.trim().is_empty() {
        errors.push("page.assets_dir must not be empty".into());
    }
}
