//! Log severity levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Ordered log severity.
///
/// The ordering drives the emission gate: a call at level `L` reaches the
/// store iff `L >= threshold`. [`Level::Off`] orders above everything else,
/// so a threshold of `Off` emits nothing; it is a threshold sentinel only and
/// never appears as the level of a call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Code-path tracing between methods and lines.
    Trace,
    /// Coarse-grained progress messages.
    Info,
    /// Fine-grained events useful while debugging.
    Debug,
    /// Potentially harmful situations.
    Warn,
    /// Errors the application can survive.
    Error,
    /// Severe errors that will presumably abort the application.
    Fatal,
    /// Disables emission entirely when used as the threshold.
    Off,
}

impl Level {
    /// Lowercase name, as stored in records and settings files.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Off => "off",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(Level::Trace),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "off" => Ok(Level::Off),
            other => Err(Error::InvalidLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Level::Trace < Level::Info);
        assert!(Level::Info < Level::Debug);
        assert!(Level::Debug < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
        assert!(Level::Fatal < Level::Off);
    }

    #[test]
    fn test_round_trip() {
        for level in [
            Level::Trace,
            Level::Info,
            Level::Debug,
            Level::Warn,
            Level::Error,
            Level::Fatal,
            Level::Off,
        ] {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert!(matches!(
            "verbose".parse::<Level>(),
            Err(Error::InvalidLevel(_))
        ));
    }
}
