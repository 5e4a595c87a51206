use super::types::{KeyBind, Modifier};

/// Render a [`KeyBind`] in the accelerator syntax understood by native menus
/// (`"Ctrl+Q"`, `"Super+Q"`, `"F12"`).
///
/// Modifiers are emitted in a fixed order so equal bindings render equally.
pub fn to_accelerator(kb: &KeyBind) -> String {
    let order = [Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Super];
    let mut parts: Vec<&str> = order
        .iter()
        .filter(|m| kb.modifiers.contains(m))
        .map(|m| match m {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Super => "Super",
        })
        .collect();
    parts.push(&kb.key);
    parts.join("+")
}
