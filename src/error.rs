//! Error types for the submission pipeline.

use crate::submit::SubmitError;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort building or submitting a job.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Job input failed validation (e.g. empty job name).
    #[error("invalid job: {0}")]
    Validation(String),

    /// The scene has never been saved, so there is no file for the farm to fetch.
    #[error("Scene file not found. Did you forget to save it?")]
    UnsavedScene,

    /// A host value is outside the accepted set.
    #[error(transparent)]
    Value(#[from] renderdock_common::Error),

    /// A record could not be represented as JSON.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Talking to the intake service failed.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl Error {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
