//! Error types for the shannon crate.
//!
//! The entropy engine and the text detector never fail: out-of-range
//! configuration is clamped and rejected encodings are skipped. Errors only
//! come from loading input and from serializing reports.

use thiserror::Error;

use crate::io::error::IoError;

/// Main error type for shannon operations.
#[derive(Debug, Error)]
pub enum ShannonError {
    /// Loading a file or stream failed; no engine state was touched.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for ShannonError {
    fn from(err: std::io::Error) -> Self {
        ShannonError::Io(IoError::StdIo(err))
    }
}

impl From<serde_json::Error> for ShannonError {
    fn from(err: serde_json::Error) -> Self {
        ShannonError::Serialization(err.to_string())
    }
}

/// Result type alias for shannon operations
pub type Result<T> = std::result::Result<T, ShannonError>;
