//! Date normalization for report bounds.

use chrono::NaiveDateTime;

/// Format used for store-side creation timestamps.
const BOUND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One side of a report's date range.
///
/// Date-valued bounds are formatted `YYYY-MM-DD HH:MM:SS` with zero padding;
/// pre-formatted strings pass through unchanged. Callers leave a side
/// unbounded by passing `None` for the whole bound.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeBound {
    /// A point in time, formatted by the reporter.
    At(NaiveDateTime),
    /// A pre-formatted bound, passed through as-is.
    Raw(String),
}

impl TimeBound {
    /// Renders the bound as the string the store compares against.
    pub fn render(&self) -> String {
        match self {
            TimeBound::At(at) => at.format(BOUND_FORMAT).to_string(),
            TimeBound::Raw(raw) => raw.clone(),
        }
    }
}

impl From<NaiveDateTime> for TimeBound {
    fn from(at: NaiveDateTime) -> Self {
        TimeBound::At(at)
    }
}

impl From<String> for TimeBound {
    fn from(raw: String) -> Self {
        TimeBound::Raw(raw)
    }
}

impl From<&str> for TimeBound {
    fn from(raw: &str) -> Self {
        TimeBound::Raw(raw.to_string())
    }
}
