//! Error types and error handling for the Newsdesk search service.
//!
//! This module defines the error types used throughout the
//! application. Mapping to HTTP status codes is handled in the
//! `http` adapter.

use thiserror::Error;

/// Result type alias for Newsdesk operations
pub type Result<T> = std::result::Result<T, NewsdeskError>;

/// Main error type for the Newsdesk service
#[derive(Error, Debug)]
pub enum NewsdeskError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Content store request for '{collection}' failed: {message}")]
    UpstreamFetch { collection: String, message: String },

    #[error("Content store returned a malformed payload for '{collection}': {message}")]
    UpstreamParse { collection: String, message: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl NewsdeskError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, NewsdeskError::Validation(_))
    }

    /// Check if this error came from the content store.
    ///
    /// Upstream errors are recovered inside the engine and never
    /// reach a client.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            NewsdeskError::UpstreamFetch { .. } | NewsdeskError::UpstreamParse { .. }
        )
    }
}
