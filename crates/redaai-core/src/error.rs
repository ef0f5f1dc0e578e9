//! Error types for the RedaAI client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the RedaAI client crates.
///
/// This provides typed, structured error variants with constructor
/// helpers so the storage and configuration layers can report failures
/// without exposing their backing implementations.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum RedaaiError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Storage error (key-value store layer)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RedaaiError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Serialization error
    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, RedaaiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = RedaaiError::io("disk full");
        assert_eq!(err.to_string(), "IO error: disk full");

        let err = RedaaiError::serialization("JSON", "unexpected eof");
        assert_eq!(err.to_string(), "Serialization error: JSON - unexpected eof");
    }

    #[test]
    fn test_constructor_helpers() {
        assert!(matches!(
            RedaaiError::storage("broken"),
            RedaaiError::Storage(_)
        ));
        assert!(matches!(
            RedaaiError::config("missing url"),
            RedaaiError::Config(_)
        ));
    }
}
