//! Log severity levels

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum severity a logger emits
///
/// Levels are ordered: a logger at `Warn` emits warnings and errors, a logger
/// at `Debug` emits everything, and `Null` emits nothing. Compare levels
/// through their ordering rather than their numeric values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum Level {
    /// Emit nothing
    Null = 0,
    /// Errors only
    #[default]
    Error = 1,
    /// Warnings and errors
    Warn = 2,
    /// Informational messages and above
    Info = 3,
    /// Everything
    Debug = 4,
}

impl Level {
    /// All levels, least to most verbose
    pub const ALL: [Level; 5] = [
        Level::Null,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
    ];

    /// Tag written in front of each message, e.g. `WARN`
    pub fn tag(self) -> &'static str {
        match self {
            Level::Null => "NULL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// Whether a logger configured at `self` emits a message of `severity`
    pub fn allows(self, severity: Level) -> bool {
        severity != Level::Null && self >= severity
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Null => "null",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
        })
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "null" | "none" | "off" => Ok(Level::Null),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(Error::InvalidLogLevel {
                value: s.to_string(),
            }),
        }
    }
}

impl From<Level> for Option<tracing::Level> {
    fn from(level: Level) -> Self {
        match level {
            Level::Null => None,
            Level::Error => Some(tracing::Level::ERROR),
            Level::Warn => Some(tracing::Level::WARN),
            Level::Info => Some(tracing::Level::INFO),
            Level::Debug => Some(tracing::Level::DEBUG),
        }
    }
}
