//! Error types for data wrappers
//!
//! A wrapper operation can fail in exactly two ways: the caller asked for a
//! format the wrapper does not advertise, or the operation failed for some
//! other reason.

use crate::format::DataFormat;
use thiserror::Error;

/// Errors returned by [`DataWrapper`](crate::DataWrapper) operations
#[derive(Error, Debug)]
pub enum DataError {
    /// The format was not advertised by the matching capability probe
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(DataFormat),

    /// Any other failure during a get or set
    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl DataError {
    /// Create an unsupported format error
    pub fn unsupported(format: &DataFormat) -> Self {
        DataError::UnsupportedFormat(format.clone())
    }

    /// Create an operation failed error
    pub fn failed(msg: impl Into<String>) -> Self {
        DataError::OperationFailed(msg.into())
    }

    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, DataError::UnsupportedFormat(_))
    }

    pub fn is_operation_failed(&self) -> bool {
        matches!(self, DataError::OperationFailed(_))
    }
}

/// Result type for wrapper operations
pub type DataResult<T> = Result<T, DataError>;

/// Error returned when a format identifier is malformed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatParseError {
    #[error("Format name is empty")]
    Empty,

    #[error("Format '{name}' has an empty segment")]
    EmptySegment { name: String },

    #[error("Format '{name}' contains invalid character '{ch}'")]
    InvalidCharacter { name: String, ch: char },
}
