//! Error types for typedstore
//!
//! Reads never fail: type mismatches resolve to zero values. The only
//! fallible step is building a store from an encoded blob.

use thiserror::Error;

/// Result type alias for fallible store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised while constructing a store from encoded input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The blob could not be parsed
    #[error("decode failed: {message}")]
    Decode {
        /// Parser message, including position when available
        message: String,
    },

    /// The blob parsed, but its top level is not a string-keyed mapping
    #[error("expected a top-level object, found {actual}")]
    NotAnObject {
        /// Kind of the top-level value that was found
        actual: &'static str,
    },
}

impl StoreError {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        StoreError::Decode {
            message: message.into(),
        }
    }

    /// Create a not-an-object error
    pub fn not_an_object(actual: &'static str) -> Self {
        StoreError::NotAnObject { actual }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::decode(err.to_string())
    }
}
