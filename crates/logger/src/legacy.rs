//! Best-effort delegation to a pre-existing logger.

use crate::{Level, LogError};

/// A caller-supplied logger mirrored for continuity during migration.
///
/// Every log call is forwarded to the same-named method here before the
/// emission gate runs, so the legacy logger sees calls the threshold filters
/// out. All methods default to no-ops; implement only the ones the legacy
/// logger actually has. Delegation is wrapped in a panic boundary by the
/// caller, so a misbehaving implementation can never disturb emission.
#[allow(unused_variables)]
pub trait LegacyLogger: Send + Sync {
    /// Mirrors a trace call.
    fn trace(&self, text: &str, error: Option<&LogError>) {}

    /// Mirrors an info call.
    fn info(&self, text: &str, error: Option<&LogError>) {}

    /// Mirrors a debug call.
    fn debug(&self, text: &str, error: Option<&LogError>) {}

    /// Mirrors a warn call.
    fn warn(&self, text: &str, error: Option<&LogError>) {}

    /// Mirrors an error call.
    fn error(&self, text: &str, error: Option<&LogError>) {}

    /// Mirrors a fatal call.
    fn fatal(&self, text: &str, error: Option<&LogError>) {}
}

/// Dispatches to the method matching `level`.
pub(crate) fn delegate(legacy: &dyn LegacyLogger, level: Level, text: &str, error: Option<&LogError>) {
    match level {
        Level::Trace => legacy.trace(text, error),
        Level::Info => legacy.info(text, error),
        Level::Debug => legacy.debug(text, error),
        Level::Warn => legacy.warn(text, error),
        Level::Error => legacy.error(text, error),
        Level::Fatal => legacy.fatal(text, error),
        // Off never reaches delegation; calls carry real severities only.
        Level::Off => {}
    }
}
