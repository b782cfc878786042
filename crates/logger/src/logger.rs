//! The logging facade: gate, record assembly and fire-and-forget submission.

use std::panic::{catch_unwind, AssertUnwindSafe};

use cloudlog_store::{ModelId, Record, RecordStore};
use tokio::sync::mpsc;
use tracing::warn;

use crate::config::{LoggerConfig, LoggerOptions};
use crate::error::Result;
use crate::legacy;
use crate::level::Level;
use crate::log_error::LogError;

/// Reserved record fields written by the logger. Caller extras under these
/// names are overwritten.
pub mod fields {
    /// The log text.
    pub const TEXT: &str = "text";
    /// Lowercase severity label.
    pub const LEVEL: &str = "level";
    /// Backtrace text, present only when backtrace capture is enabled and an
    /// error was supplied.
    pub const TRACE: &str = "trace";
}

/// Cloud-backed logger.
///
/// Each call mirrors into the legacy logger (if configured), then, when the
/// call's level passes the threshold, assembles a record and hands it to a
/// background worker that submits it to the store. Submission failures never
/// reach the caller; with the `warning` flag on they produce a
/// [`tracing::warn!`] diagnostic.
///
/// Must be constructed inside a Tokio runtime (the worker is spawned at
/// construction).
pub struct Logger<S: RecordStore> {
    config: LoggerConfig,
    sender: mpsc::UnboundedSender<Record>,
    // Kept so callers can reach the store they handed in.
    store: S,
}

impl<S: RecordStore> Logger<S> {
    /// Builds a logger from `options`, submitting records to `store`.
    ///
    /// Fails fast when a required field (csk, aci, level, model identifier)
    /// is still missing after merging the settings file over the explicit
    /// options.
    pub fn new(options: LoggerOptions, store: S) -> Result<Self> {
        let config = options.into_config()?;
        let (sender, receiver) = mpsc::unbounded_channel();

        tokio::spawn(submit_worker(
            store.clone(),
            config.model(),
            config.warning(),
            receiver,
        ));

        Ok(Self {
            config,
            sender,
            store,
        })
    }

    /// The merged, immutable configuration.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// The store records are submitted to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Logs at trace level.
    pub fn trace(&self, text: &str, error: Option<&LogError>, extras: Option<Record>) {
        self.dispatch(Level::Trace, text, error, extras);
    }

    /// Logs at info level.
    pub fn info(&self, text: &str, error: Option<&LogError>, extras: Option<Record>) {
        self.dispatch(Level::Info, text, error, extras);
    }

    /// Logs at debug level.
    pub fn debug(&self, text: &str, error: Option<&LogError>, extras: Option<Record>) {
        self.dispatch(Level::Debug, text, error, extras);
    }

    /// Logs at warn level.
    pub fn warn(&self, text: &str, error: Option<&LogError>, extras: Option<Record>) {
        self.dispatch(Level::Warn, text, error, extras);
    }

    /// Logs at error level.
    pub fn error(&self, text: &str, error: Option<&LogError>, extras: Option<Record>) {
        self.dispatch(Level::Error, text, error, extras);
    }

    /// Logs at fatal level.
    pub fn fatal(&self, text: &str, error: Option<&LogError>, extras: Option<Record>) {
        self.dispatch(Level::Fatal, text, error, extras);
    }

    fn dispatch(&self, level: Level, text: &str, error: Option<&LogError>, extras: Option<Record>) {
        // Legacy passthrough runs unconditionally, before the gate; a panic
        // in the legacy logger must not disturb emission.
        if let Some(legacy) = self.config.legacy() {
            let _ = catch_unwind(AssertUnwindSafe(|| {
                legacy::delegate(legacy, level, text, error);
            }));
        }

        if level < self.config.level() {
            return;
        }

        let record = build_record(level, text, error, extras, self.config.backtrace());

        if self.sender.send(record).is_err() && self.config.warning() {
            warn!(target: "cloudlog", "submission worker is gone, dropping record");
        }
    }
}

/// Assembles the record for one gated-in call: caller extras first, reserved
/// fields last so reserved values win on collision.
fn build_record(
    level: Level,
    text: &str,
    error: Option<&LogError>,
    extras: Option<Record>,
    backtrace: bool,
) -> Record {
    let mut record = extras.unwrap_or_default();
    record.set(fields::TEXT, text);
    record.set(fields::LEVEL, level.as_str());

    if backtrace {
        if let Some(error) = error {
            record.set(fields::TRACE, error.backtrace_text());
        }
    }

    record
}

/// Drains the channel, submitting one record at a time. Failures degrade to
/// an optional warning diagnostic.
async fn submit_worker<S: RecordStore>(
    store: S,
    model: ModelId,
    warning: bool,
    mut receiver: mpsc::UnboundedReceiver<Record>,
) {
    while let Some(record) = receiver.recv().await {
        if let Err(e) = store.submit(model, record).await {
            if warning {
                warn!(target: "cloudlog", error = ?e, "record submission failed");
            }
        }
    }
}
