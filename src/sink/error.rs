//! Error types for download sinks.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting a save request.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Request payload could not be interpreted
    #[error("unusable save payload for '{filename}': {reason}\n  Suggestion: {suggestion}")]
    InvalidPayload {
        /// The requested filename
        filename: String,
        /// Why the payload was rejected
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// Remote resource could not be fetched
    #[error("failed to fetch '{url}': {reason}\n  Suggestion: {suggestion}")]
    Network {
        /// The remote address
        url: String,
        /// Why the fetch failed
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// Local write failed
    #[error("failed to write '{path}'")]
    Io {
        /// The target path
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl SinkError {
    /// Creates an `InvalidPayload` error.
    #[must_use]
    pub fn invalid_payload(filename: &str, reason: &str) -> Self {
        Self::InvalidPayload {
            filename: filename.to_string(),
            reason: reason.to_string(),
            suggestion: "Only data: URIs and http(s) URLs are supported".to_string(),
        }
    }

    /// Creates a `Network` error.
    #[must_use]
    pub fn network(url: &str, reason: &str) -> Self {
        Self::Network {
            url: url.to_string(),
            reason: reason.to_string(),
            suggestion: "Check your network connection and try again".to_string(),
        }
    }

    /// Creates an `Io` error.
    #[must_use]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }
}
