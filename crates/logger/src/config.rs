//! Logger configuration: explicit options, optional settings file, and the
//! merged immutable config.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cloudlog_store::{Credentials, ModelId};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::legacy::LegacyLogger;
use crate::level::Level;

/// Default maximum records a report drain processes across pages.
pub const DEFAULT_REPORT_LIMIT: usize = 100;

/// Settings file contents (JSON, read once at construction).
///
/// Keys present in the file replace the corresponding explicit options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Client secret key.
    pub csk: Option<String>,
    /// Application client id.
    pub aci: Option<String>,
    /// Level threshold name.
    pub level: Option<String>,
    /// Target model identifier.
    pub model_identifier: Option<u64>,
    /// Whether to attach backtraces to records.
    pub backtrace: Option<bool>,
    /// Whether to emit operator warnings.
    pub warning: Option<bool>,
    /// Report drain limit.
    pub report_limit: Option<usize>,
}

impl Settings {
    /// Reads and parses a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Options for building a [`Logger`](crate::Logger).
///
/// Any field may instead come from a settings file via
/// [`settings_file`](LoggerOptions::settings_file); file values take
/// precedence over explicit ones for the keys they carry. The legacy logger
/// has no file representation.
#[derive(Default)]
pub struct LoggerOptions {
    legacy: Option<Arc<dyn LegacyLogger>>,
    settings_file: Option<PathBuf>,
    level: Option<Level>,
    csk: Option<String>,
    aci: Option<String>,
    model: Option<ModelId>,
    backtrace: Option<bool>,
    warning: Option<bool>,
    report_limit: Option<usize>,
}

impl LoggerOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies a legacy logger to mirror calls into.
    pub fn legacy(mut self, legacy: Arc<dyn LegacyLogger>) -> Self {
        self.legacy = Some(legacy);
        self
    }

    /// Points at a JSON settings file.
    pub fn settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_file = Some(path.into());
        self
    }

    /// Sets the level threshold.
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the client secret key.
    pub fn csk(mut self, csk: impl Into<String>) -> Self {
        self.csk = Some(csk.into());
        self
    }

    /// Sets the application client id.
    pub fn aci(mut self, aci: impl Into<String>) -> Self {
        self.aci = Some(aci.into());
        self
    }

    /// Sets the target model identifier.
    pub fn model(mut self, model: impl Into<ModelId>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Enables or disables backtrace capture.
    pub fn backtrace(mut self, backtrace: bool) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    /// Enables or disables operator warnings.
    pub fn warning(mut self, warning: bool) -> Self {
        self.warning = Some(warning);
        self
    }

    /// Sets the report drain limit.
    pub fn report_limit(mut self, limit: usize) -> Self {
        self.report_limit = Some(limit);
        self
    }

    /// Merges the settings file (if any) over the explicit options and
    /// validates the required fields.
    pub(crate) fn into_config(self) -> Result<LoggerConfig> {
        let mut csk = self.csk;
        let mut aci = self.aci;
        let mut level = self.level;
        let mut model = self.model;
        let mut backtrace = self.backtrace;
        let mut warning = self.warning;
        let mut report_limit = self.report_limit;

        if let Some(path) = &self.settings_file {
            let settings = Settings::load(path)?;
            csk = settings.csk.or(csk);
            aci = settings.aci.or(aci);
            level = match settings.level {
                Some(name) => Some(name.parse()?),
                None => level,
            };
            model = settings.model_identifier.map(ModelId).or(model);
            backtrace = settings.backtrace.or(backtrace);
            warning = settings.warning.or(warning);
            report_limit = settings.report_limit.or(report_limit);
        }

        Ok(LoggerConfig {
            credentials: Credentials::new(
                csk.ok_or(Error::MissingCsk)?,
                aci.ok_or(Error::MissingAci)?,
            ),
            level: level.ok_or(Error::MissingLevel)?,
            model: model.ok_or(Error::MissingModel)?,
            backtrace: backtrace.unwrap_or(false),
            warning: warning.unwrap_or(false),
            report_limit: report_limit.unwrap_or(DEFAULT_REPORT_LIMIT),
            legacy: self.legacy,
        })
    }
}

/// Merged logger configuration. Immutable once built: fields are private and
/// there are no setters.
pub struct LoggerConfig {
    credentials: Credentials,
    level: Level,
    model: ModelId,
    backtrace: bool,
    warning: bool,
    report_limit: usize,
    legacy: Option<Arc<dyn LegacyLogger>>,
}

impl LoggerConfig {
    /// Backend credentials, for building the store client.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Level threshold.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Target model identifier.
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// Whether backtraces are attached to records.
    pub fn backtrace(&self) -> bool {
        self.backtrace
    }

    /// Whether operator warnings are emitted.
    pub fn warning(&self) -> bool {
        self.warning
    }

    /// Report drain limit.
    pub fn report_limit(&self) -> usize {
        self.report_limit
    }

    pub(crate) fn legacy(&self) -> Option<&dyn LegacyLogger> {
        self.legacy.as_deref()
    }
}

impl std::fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("model", &self.model)
            .field("backtrace", &self.backtrace)
            .field("warning", &self.warning)
            .field("report_limit", &self.report_limit)
            .field("legacy", &self.legacy.is_some())
            .finish_non_exhaustive()
    }
}
