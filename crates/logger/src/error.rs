//! Error types for logger construction.

use std::path::PathBuf;

/// Result type for logger operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a logger or loading settings.
///
/// Nothing past construction returns these; steady-state failures degrade to
/// warning-channel diagnostics instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Client secret key missing after merging settings and options.
    #[error("csk is missing, pass a valid client secret key")]
    MissingCsk,

    /// Application client id missing after merging settings and options.
    #[error("aci is missing, pass a valid application client id")]
    MissingAci,

    /// Level threshold missing after merging settings and options.
    #[error("level is missing, pass one of fatal, error, warn, debug, info, trace or off")]
    MissingLevel,

    /// Model identifier missing after merging settings and options.
    #[error("model identifier is missing, pass the model that stores your logs")]
    MissingModel,

    /// Level name not among the recognized set.
    #[error("unknown level name: {0:?}")]
    InvalidLevel(String),

    /// Settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    ReadSettings {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Settings file is not valid JSON.
    #[error("failed to parse settings file: {0}")]
    ParseSettings(#[from] serde_json::Error),
}
