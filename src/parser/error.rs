//! Error types for page-address parsing.

use thiserror::Error;

/// Errors that can occur while deriving a lesson key from a page address.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// No page address was available to parse
    #[error("no page address available: {reason}\n  Suggestion: {suggestion}")]
    MissingUrl {
        /// Why no address was available
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// Path does not match the expected lesson-page shape
    #[error("malformed page path '{url}': {reason}\n  Suggestion: {suggestion}")]
    MalformedPath {
        /// The page address that failed parsing
        url: String,
        /// Why the path is malformed
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },
}

impl ParseError {
    /// Creates a `MissingUrl` error for an absent page context.
    #[must_use]
    pub fn missing_url() -> Self {
        Self::MissingUrl {
            reason: "the invoking context provided no address".to_string(),
            suggestion: "Invoke the export with the address of an open lesson page".to_string(),
        }
    }

    /// Creates a `MalformedPath` error for an address the url crate rejects.
    #[must_use]
    pub fn invalid_url(url: &str, parse_error: &str) -> Self {
        Self::MalformedPath {
            url: url.to_string(),
            reason: parse_error.to_string(),
            suggestion: "Check the address format and try again".to_string(),
        }
    }

    /// Creates a `MalformedPath` error for a path with no usable last segment.
    #[must_use]
    pub fn empty_segment(url: &str) -> Self {
        Self::MalformedPath {
            url: url.to_string(),
            reason: "the path has no lesson segment".to_string(),
            suggestion: "Use a lesson page address like /lessons/123-some-title".to_string(),
        }
    }

    /// Creates a `MalformedPath` error for a lesson segment without an id.
    #[must_use]
    pub fn missing_id(url: &str) -> Self {
        Self::MalformedPath {
            url: url.to_string(),
            reason: "the lesson segment has no id before the first '-'".to_string(),
            suggestion: "Lesson segments start with a numeric id, e.g. 123-some-title".to_string(),
        }
    }

    /// Creates a `MalformedPath` error for an unknown kind segment.
    #[must_use]
    pub fn unknown_kind(url: &str, kind: &str) -> Self {
        Self::MalformedPath {
            url: url.to_string(),
            reason: format!("unknown lesson kind segment '{kind}'"),
            suggestion: "Lesson pages live under /courses/ or /lessons/".to_string(),
        }
    }

    /// Creates a `MalformedPath` error for a course path without a chapter.
    #[must_use]
    pub fn missing_chapter(url: &str) -> Self {
        Self::MalformedPath {
            url: url.to_string(),
            reason: "course pages require a 'chapter' query parameter".to_string(),
            suggestion: "Add ?chapter=N with the lesson's one-based chapter number".to_string(),
        }
    }

    /// Creates a `MalformedPath` error for a non-integer chapter value.
    #[must_use]
    pub fn invalid_chapter(url: &str, raw: &str) -> Self {
        Self::MalformedPath {
            url: url.to_string(),
            reason: format!("chapter '{raw}' is not an integer"),
            suggestion: "Use the lesson's one-based chapter number, e.g. ?chapter=3".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_missing_url_message() {
        let err = ParseError::missing_url();
        let msg = err.to_string();
        assert!(msg.contains("no page address"), "should mention no address");
        assert!(msg.contains("Suggestion"), "should have suggestion");
    }

    #[test]
    fn test_parse_error_unknown_kind_message() {
        let err = ParseError::unknown_kind("https://example.com/videos/1-a", "videos");
        let msg = err.to_string();
        assert!(msg.contains("videos"), "should contain kind segment");
        assert!(msg.contains("/courses/"), "suggestion should name valid kinds");
    }

    #[test]
    fn test_parse_error_missing_chapter_message() {
        let err = ParseError::missing_chapter("https://example.com/courses/42-a");
        let msg = err.to_string();
        assert!(msg.contains("chapter"), "should mention chapter");
        assert!(msg.contains("one-based"), "suggestion should mention one-based");
    }

    #[test]
    fn test_parse_error_invalid_chapter_message() {
        let err = ParseError::invalid_chapter("https://example.com/courses/42-a?chapter=x", "x");
        let msg = err.to_string();
        assert!(msg.contains("'x'"), "should contain the raw value");
        assert!(msg.contains("integer"), "should mention integer");
    }

    #[test]
    fn test_parse_error_clone() {
        let err = ParseError::missing_id("https://example.com/lessons/-a");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
