pub mod actions;
pub mod errors;
pub mod signals;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, LumenError, PlatformError};
pub use signals::{Signal, SignalDirection};
pub use types::{IsolationMode, Size};

pub type Result<T> = std::result::Result<T, LumenError>;
