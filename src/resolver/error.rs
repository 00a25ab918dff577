//! Error types for catalog resolution.
//!
//! This module defines structured errors for lesson lookup, following the
//! What/Why/Fix pattern used across the project.

use thiserror::Error;

/// Errors that can occur while resolving a lesson key against the catalog.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// Search request could not be completed
    #[error("catalog search failed for '{query}': {reason}\n  Suggestion: {suggestion}")]
    SearchFailed {
        /// The free-text query that was searched
        query: String,
        /// Why the search failed
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// Search response did not match the expected schema
    #[error("unexpected catalog response for '{query}': {reason}\n  Suggestion: {suggestion}")]
    InvalidResponse {
        /// The free-text query that was searched
        query: String,
        /// Why the response was rejected
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// Search succeeded but no unique record matched the key
    #[error(
        "lesson not found for {key}: {matched} of {candidates} candidate(s) matched\n  Suggestion: {suggestion}"
    )]
    LessonNotFound {
        /// Display form of the lesson key
        key: String,
        /// Number of records the search returned
        candidates: usize,
        /// Number of records satisfying the match predicate
        matched: usize,
        /// How to fix the issue
        suggestion: String,
    },
}

impl ResolveError {
    /// Creates a `SearchFailed` error.
    #[must_use]
    pub fn search_failed(query: &str, reason: &str) -> Self {
        Self::SearchFailed {
            query: query.to_string(),
            reason: reason.to_string(),
            suggestion: "Check your network connection and try again".to_string(),
        }
    }

    /// Creates an `InvalidResponse` error.
    #[must_use]
    pub fn invalid_response(query: &str, reason: &str) -> Self {
        Self::InvalidResponse {
            query: query.to_string(),
            reason: reason.to_string(),
            suggestion: "The catalog API may have changed; update the tool".to_string(),
        }
    }

    /// Creates a `LessonNotFound` error.
    #[must_use]
    pub fn not_found(key: &impl std::fmt::Display, candidates: usize, matched: usize) -> Self {
        Self::LessonNotFound {
            key: key.to_string(),
            candidates,
            matched,
            suggestion: "Open the lesson page directly and check its address".to_string(),
        }
    }
}
