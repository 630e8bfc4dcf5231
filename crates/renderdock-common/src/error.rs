//! Common error types used throughout renderdock.
//!
//! Host state arrives as loosely typed strings; anything that does not map
//! onto one of the closed enums in [`crate::types`] is rejected here.

/// Common error type for renderdock.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A host value is outside the closed set accepted for its kind.
    #[error("invalid {kind}: {value:?}")]
    InvalidValue {
        /// What was being parsed (e.g. "render engine").
        kind: &'static str,
        /// The rejected value as received.
        value: String,
    },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new InvalidValue error.
    pub fn invalid_value<S: Into<String>>(kind: &'static str, value: S) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
