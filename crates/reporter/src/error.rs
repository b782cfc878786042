//! Error types for reporter construction.

/// Result type for reporter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a reporter.
///
/// Queries themselves never return these; steady-state failures degrade to
/// warning-channel diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Credentials missing after merging settings and options.
    #[error("credentials are missing, pass a csk/aci pair")]
    MissingCredentials,

    /// Model identifier missing after merging settings and options.
    #[error("model identifier is missing, pass the model that stores your logs")]
    MissingModel,

    /// Settings file could not be loaded or parsed.
    #[error(transparent)]
    Settings(#[from] cloudlog_logger::Error),
}
