//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log verbosity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` directive scoped to the lumen crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "lumen=trace",
            LogLevel::Debug => "lumen=debug",
            LogLevel::Info => "lumen=info",
            LogLevel::Warn => "lumen=warn",
            LogLevel::Error => "lumen=error",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
