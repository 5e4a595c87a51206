mod accelerator;
mod parse;
mod types;

pub use accelerator::to_accelerator;
pub use parse::parse_keybind;
pub use types::{KeyBind, Modifier};
