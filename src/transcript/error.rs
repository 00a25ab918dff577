//! Error types for transcript assembly.

use thiserror::Error;

/// Errors that can occur while building a transcript.
#[derive(Debug, Clone, Error)]
pub enum TranscriptError {
    /// Timed-word document could not be fetched or parsed
    #[error("failed to fetch timed-word document '{url}': {reason}\n  Suggestion: {suggestion}")]
    Fetch {
        /// The document address
        url: String,
        /// Why the fetch failed
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// Document parsed but carries no words sequence
    #[error("timed-word document '{url}' has no words sequence\n  Suggestion: {suggestion}")]
    MissingWords {
        /// The document address
        url: String,
        /// How to fix the issue
        suggestion: String,
    },
}

impl TranscriptError {
    /// Creates a `Fetch` error.
    #[must_use]
    pub fn fetch(url: &str, reason: &str) -> Self {
        Self::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
            suggestion: "Check your network connection and try again".to_string(),
        }
    }

    /// Creates a `MissingWords` error.
    #[must_use]
    pub fn missing_words(url: &str) -> Self {
        Self::MissingWords {
            url: url.to_string(),
            suggestion: "The document format may have changed; update the tool".to_string(),
        }
    }
}
