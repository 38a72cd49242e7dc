//! Secret redaction for log messages
//!
//! Masks the middle of anything shaped like an API key before it reaches a
//! sink. The first and last few characters stay visible so a key can still
//! be identified by a human reading the log.

use crate::error::Result;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Pattern for secret and restricted API keys in live and test mode
pub const API_KEY_PATTERN: &str = r"(sk_live|sk_test|rk_live|rk_test)_[a-zA-Z0-9]{2}[a-zA-Z0-9]{1,}";

/// Characters left visible at the start of a redacted key
pub const KEEP_START: usize = 10;

/// Characters left visible at the end of a redacted key
pub const KEEP_END: usize = 4;

/// Character written over the hidden part of a match
pub const FILLER: char = '*';

/// Built-in API key redactor
///
/// The logger cannot run without it, so a pattern that fails to compile
/// aborts the process on first use.
static API_KEY_REDACTOR: LazyLock<Redactor> = LazyLock::new(|| {
    Redactor::new(API_KEY_PATTERN, KEEP_START, KEEP_END).expect("API key pattern must compile")
});

/// A compiled secret pattern plus the reveal policy applied to each match
#[derive(Debug, Clone)]
pub struct Redactor {
    regex: Regex,
    keep_start: usize,
    keep_end: usize,
}

impl Redactor {
    /// Compile a redactor that keeps `keep_start` leading and `keep_end`
    /// trailing characters of every match
    pub fn new(pattern: &str, keep_start: usize, keep_end: usize) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            keep_start,
            keep_end,
        })
    }

    /// The built-in API key redactor
    pub fn api_keys() -> &'static Redactor {
        &API_KEY_REDACTOR
    }

    /// Mask every non-overlapping match in `msg`
    ///
    /// Borrows the input when nothing matched.
    pub fn redact<'a>(&self, msg: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(msg, |caps: &Captures<'_>| {
            redact_middle(&caps[0], self.keep_start, self.keep_end)
        })
    }

    /// Whether `msg` contains anything this redactor would mask
    pub fn is_match(&self, msg: &str) -> bool {
        self.regex.is_match(msg)
    }
}

/// Redact `msg` with the built-in API key redactor
pub fn redact(msg: &str) -> Cow<'_, str> {
    API_KEY_REDACTOR.redact(msg)
}

/// Replace everything between the first `start` and last `end` characters
/// with [`FILLER`], preserving length
///
/// Strings no longer than `start + end` are returned untouched.
pub fn redact_middle(msg: &str, start: usize, end: usize) -> String {
    let len = msg.chars().count();
    if len <= start + end {
        return msg.to_string();
    }

    msg.chars()
        .enumerate()
        .map(|(i, c)| {
            if i < start || i >= len - end {
                c
            } else {
                FILLER
            }
        })
        .collect()
}
