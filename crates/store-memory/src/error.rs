//! Error types for the in-memory store.

/// Errors the in-memory store can report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Submission rejected by the injected fault switch.
    #[error("submission rejected")]
    SubmissionRejected,

    /// Query rejected by the injected fault switch.
    #[error("query rejected")]
    QueryRejected,
}
