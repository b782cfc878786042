//! Error details attached to a log call.

use std::error::Error as StdError;
use std::fmt;

/// Error details a caller attaches to a log call.
///
/// Carries a message and, optionally, backtrace text. When built from a
/// [`std::error::Error`] without an explicit backtrace, the rendered
/// `source()` chain stands in for one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogError {
    message: String,
    backtrace: Option<String>,
}

impl LogError {
    /// Creates an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            backtrace: None,
        }
    }

    /// Attaches backtrace text.
    pub fn with_backtrace(mut self, backtrace: impl Into<String>) -> Self {
        self.backtrace = Some(backtrace.into());
        self
    }

    /// Builds from any error, folding its `source()` chain into the
    /// backtrace when the chain is non-empty.
    pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
        let mut frames = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            frames.push(cause.to_string());
            source = cause.source();
        }

        Self {
            message: error.to_string(),
            backtrace: (!frames.is_empty()).then(|| frames.join("\ncaused by: ")),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The backtrace text, if any.
    pub fn backtrace(&self) -> Option<&str> {
        self.backtrace.as_deref()
    }

    /// Backtrace text written to records: the attached backtrace, or an
    /// empty string when there is none.
    pub(crate) fn backtrace_text(&self) -> &str {
        self.backtrace.as_deref().unwrap_or("")
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
