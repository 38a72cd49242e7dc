//! Leveled logger implementations

use super::level::Level;
use super::redact::redact;
use super::sink::Sink;
use std::fmt;

/// Leveled, printf-style logging interface used throughout the crate
///
/// Messages are passed as [`fmt::Arguments`]; the [`debugf!`](crate::debugf),
/// [`infof!`](crate::infof), [`warnf!`](crate::warnf) and
/// [`errorf!`](crate::errorf) macros build them from a format string.
/// Implementations must redact secrets before writing anything.
pub trait LeveledLog: Send + Sync {
    /// Log a debug message
    fn debugf(&self, args: fmt::Arguments<'_>);

    /// Log an informational message
    fn infof(&self, args: fmt::Arguments<'_>);

    /// Log a warning
    fn warnf(&self, args: fmt::Arguments<'_>);

    /// Log an error
    fn errorf(&self, args: fmt::Arguments<'_>);
}

/// Logger that writes `[LEVEL] message` lines to standard output or error
///
/// Debug and info messages go to the primary sink (stdout by default),
/// warnings and errors to the diagnostic sink (stderr by default). Level and
/// sinks are fixed at construction, so one instance can be shared freely.
#[derive(Debug, Clone)]
pub struct LeveledLogger {
    level: Level,
    primary: Sink,
    diagnostic: Sink,
}

impl LeveledLogger {
    /// Create a logger writing to stdout/stderr at `level`
    pub fn new(level: Level) -> Self {
        Self {
            level,
            primary: Sink::Stdout,
            diagnostic: Sink::Stderr,
        }
    }

    /// Override the sink used for debug and info messages
    #[must_use]
    pub fn with_primary(mut self, sink: Sink) -> Self {
        self.primary = sink;
        self
    }

    /// Override the sink used for warnings and errors
    #[must_use]
    pub fn with_diagnostic(mut self, sink: Sink) -> Self {
        self.diagnostic = sink;
        self
    }

    /// Configured minimum level
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether a message of `severity` would be written
    pub fn enabled(&self, severity: Level) -> bool {
        self.level.allows(severity)
    }

    fn print_log(&self, severity: Level, sink: &Sink, args: fmt::Arguments<'_>) {
        // Redaction runs regardless of level
        let message = args.to_string();
        let message = redact(&message);
        if self.enabled(severity) {
            sink.write_line(&format!("[{}] {}\n", severity.tag(), message));
        }
    }
}

impl Default for LeveledLogger {
    fn default() -> Self {
        Self::new(Level::Error)
    }
}

impl LeveledLog for LeveledLogger {
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.print_log(Level::Debug, &self.primary, args);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.print_log(Level::Info, &self.primary, args);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.print_log(Level::Warn, &self.diagnostic, args);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.print_log(Level::Error, &self.diagnostic, args);
    }
}

/// Logger that forwards redacted messages to `tracing`
///
/// Lets applications that already install a `tracing` subscriber receive
/// this crate's diagnostics through it. Filtering is left to the subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl LeveledLog for TracingLogger {
    fn debugf(&self, args: fmt::Arguments<'_>) {
        tracing::debug!("{}", redact(&args.to_string()));
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        tracing::info!("{}", redact(&args.to_string()));
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        tracing::warn!("{}", redact(&args.to_string()));
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        tracing::error!("{}", redact(&args.to_string()));
    }
}
