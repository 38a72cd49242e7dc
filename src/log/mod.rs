//! Leveled, redacting logger
//!
//! # Overview
//!
//! [`LeveledLogger`] filters messages by a configured [`Level`], masks
//! anything that looks like an API key, and writes `[LEVEL] message` lines
//! to one of two sinks. Library code logs through the [`LeveledLog`] trait,
//! so applications can substitute their own implementation or route output
//! into `tracing` with [`TracingLogger`].
//!
//! # Default logger
//!
//! Components that are not handed a logger explicitly use
//! [`default_logger`]. It is created lazily at [`Level::Error`] on first use.
//! An application may replace it with [`set_default_logger`], but only
//! before anything has read it.

mod level;
mod logger;
mod redact;
mod sink;

pub use level::Level;
pub use logger::{LeveledLog, LeveledLogger, TracingLogger};
pub use redact::{redact, redact_middle, Redactor, API_KEY_PATTERN, FILLER, KEEP_END, KEEP_START};
pub use sink::{SharedBuffer, SharedWriter, Sink};

use crate::error::{Error, Result};
use std::sync::{Arc, OnceLock};

static DEFAULT_LOGGER: OnceLock<Arc<dyn LeveledLog>> = OnceLock::new();

/// The process-wide default logger
///
/// Installs `LeveledLogger::new(Level::Error)` if nothing was set yet.
pub fn default_logger() -> Arc<dyn LeveledLog> {
    Arc::clone(DEFAULT_LOGGER.get_or_init(|| Arc::new(LeveledLogger::default())))
}

/// Replace the process-wide default logger
///
/// Must be called once, before the first [`default_logger`] call; fails
/// with [`Error::LoggerAlreadyInitialized`] otherwise.
pub fn set_default_logger(logger: Arc<dyn LeveledLog>) -> Result<()> {
    DEFAULT_LOGGER
        .set(logger)
        .map_err(|_| Error::LoggerAlreadyInitialized)
}

/// Log a debug message with `format!` syntax
///
/// ```rust,ignore
/// debugf!(logger, "fetched {} accounts", n);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        {
            use $crate::log::LeveledLog as _;
            $logger.debugf(format_args!($($arg)+))
        }
    };
}

/// Log an informational message with `format!` syntax
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        {
            use $crate::log::LeveledLog as _;
            $logger.infof(format_args!($($arg)+))
        }
    };
}

/// Log a warning with `format!` syntax
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        {
            use $crate::log::LeveledLog as _;
            $logger.warnf(format_args!($($arg)+))
        }
    };
}

/// Log an error with `format!` syntax
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        {
            use $crate::log::LeveledLog as _;
            $logger.errorf(format_args!($($arg)+))
        }
    };
}
