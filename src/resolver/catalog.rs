//! Catalog search resolver - resolves a lesson key to a unique record via the
//! search API.
//!
//! The [`CatalogResolver`] calls the catalog's `lessons.json` search endpoint
//! with the key's title hint as a free-text query across all difficulty
//! tiers, then selects the single record matching the key. Course keys match
//! on the stringified course id plus the one-based-to-zero-based chapter
//! conversion; standalone keys match on the lesson id.

use std::fmt;

use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, error, warn};

use crate::http::build_http_client;
use crate::parser::{LessonKey, LessonKind};
use crate::user_agent;

use super::error::ResolveError;
use super::models::{LessonRecord, Placement, SearchResult};

/// Default catalog base URL.
const DEFAULT_BASE_URL: &str = "https://duchinese.net";

/// Difficulty tiers included in every search. The endpoint has no
/// direct-by-id lookup, so queries span all six tiers.
const SEARCH_LEVELS: [&str; 6] = [
    "newbie",
    "elementary",
    "intermediate",
    "upper intermediate",
    "master",
    "advanced",
];

/// Resolves lesson keys to catalog records via the search API.
pub struct CatalogResolver {
    client: Client,
    base_url: String,
}

impl CatalogResolver {
    /// Creates a resolver against the production catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if HTTP client construction fails.
    pub fn new() -> Result<Self, ResolveError> {
        Self::build(DEFAULT_BASE_URL.to_string())
    }

    /// Creates a resolver with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if HTTP client construction fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ResolveError> {
        Self::build(base_url.into())
    }

    fn build(base_url: String) -> Result<Self, ResolveError> {
        let client = build_http_client(&user_agent::default_catalog_user_agent()).map_err(|e| {
            ResolveError::search_failed("", &format!("HTTP client construction failed: {e}"))
        })?;
        Ok(Self { client, base_url })
    }

    /// Runs a free-text catalog search across all difficulty tiers.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::SearchFailed`] when the request cannot be
    /// completed, and [`ResolveError::InvalidResponse`] when the response
    /// body is not a valid search result document.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<SearchResult, ResolveError> {
        let url = self.search_url(query);
        debug!(api_url = %url, "Calling catalog search API");

        let response = match self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "Catalog search request failed");
                return Err(ResolveError::search_failed(
                    query,
                    "Cannot reach the catalog search API. Check your network connection.",
                ));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let reason = match status.as_u16() {
                429 => "Catalog rate limit exceeded. Try again in a few seconds.".to_string(),
                s if s >= 500 => "Catalog API unavailable. Try again later.".to_string(),
                s => format!("Catalog API returned HTTP {s}"),
            };
            debug!(status = status.as_u16(), %reason, "Catalog API error");
            return Err(ResolveError::search_failed(query, &reason));
        }

        match response.json::<SearchResult>().await {
            Ok(result) => {
                debug!(lessons = result.lessons.len(), "Catalog search succeeded");
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse catalog search response JSON");
                Err(ResolveError::invalid_response(
                    query,
                    "Unexpected catalog search response format",
                ))
            }
        }
    }

    /// Resolves a key to the unique matching record.
    ///
    /// # Errors
    ///
    /// Propagates search failures, and returns
    /// [`ResolveError::LessonNotFound`] when zero or multiple records satisfy
    /// the key's match predicate.
    #[tracing::instrument(skip(self), fields(key = %key))]
    pub async fn resolve(&self, key: &LessonKey) -> Result<LessonRecord, ResolveError> {
        let result = self.search(&key.title_hint).await?;
        select_lesson(key, result)
    }

    fn search_url(&self, query: &str) -> String {
        let levels = SEARCH_LEVELS
            .iter()
            .map(|level| urlencoding::encode(level).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}/lessons.json?levels={}&q={}",
            self.base_url,
            levels,
            urlencoding::encode(query)
        )
    }
}

impl fmt::Debug for CatalogResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogResolver")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Selects the unique record matching `key` from a search result.
///
/// On zero or multiple matches the full search result is logged for
/// diagnosis before failing with `LessonNotFound`.
fn select_lesson(key: &LessonKey, mut result: SearchResult) -> Result<LessonRecord, ResolveError> {
    let candidates = result.lessons.len();
    let matched: Vec<usize> = result
        .lessons
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_key(key, record))
        .map(|(index, _)| index)
        .collect();

    match matched.as_slice() {
        [index] => {
            let record = result.lessons.swap_remove(*index);
            debug!(lesson_id = %record.id, title = %record.title, "Selected matching lesson");
            Ok(record)
        }
        [] => {
            error!(key = %key, search_result = ?result, "No catalog record matched the lesson key");
            Err(ResolveError::not_found(key, candidates, 0))
        }
        indices => {
            error!(
                key = %key,
                matched = indices.len(),
                search_result = ?result,
                "Multiple catalog records matched the lesson key"
            );
            Err(ResolveError::not_found(key, candidates, indices.len()))
        }
    }
}

/// Match predicate for a single record.
///
/// Page chapters are one-based while catalog positions are zero-based, so a
/// course key matches `course_position + 1 == chapter`. Standalone keys match
/// on lesson id alone, regardless of placement.
fn matches_key(key: &LessonKey, record: &LessonRecord) -> bool {
    match (&key.kind, &record.placement) {
        (
            LessonKind::Course { chapter },
            Placement::Course {
                course,
                course_position,
            },
        ) => course.id.to_string() == key.id && course_position + 1 == *chapter,
        (LessonKind::Course { .. }, Placement::Standalone {}) => false,
        (LessonKind::Standalone, _) => record.id == key.id,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::resolver::models::CourseRef;

    fn course_record(id: &str, course_id: u64, position: u32) -> LessonRecord {
        LessonRecord {
            id: id.to_string(),
            title: format!("Lesson {id}"),
            level: Some("intermediate".to_string()),
            synopsis: None,
            free: Some(false),
            large_image_url: None,
            thumb_image_url: None,
            canonical_url: None,
            release_at: None,
            updated_at: None,
            crd_url: format!("https://cdn.example.com/crd/{id}.json"),
            audio_url: format!("https://cdn.example.com/audio/{id}.mp3"),
            placement: Placement::Course {
                course: CourseRef {
                    id: course_id,
                    title: None,
                    lesson_count: None,
                    levels: None,
                },
                course_position: position,
            },
        }
    }

    fn standalone_record(id: &str) -> LessonRecord {
        LessonRecord {
            placement: Placement::Standalone {},
            ..course_record(id, 0, 0)
        }
    }

    fn search_result(lessons: Vec<LessonRecord>) -> SearchResult {
        SearchResult {
            lessons,
            next_page_url: None,
        }
    }

    // ==================== Match Predicate ====================

    #[test]
    fn test_matches_key_course_one_based_chapter() {
        // Chapter 3 on the page corresponds to zero-based position 2.
        let key = LessonKey::course("42", "short stories", 3);
        assert!(matches_key(&key, &course_record("l1", 42, 2)));
        assert!(!matches_key(&key, &course_record("l1", 42, 3)));
        assert!(!matches_key(&key, &course_record("l1", 41, 2)));
    }

    #[test]
    fn test_matches_key_course_chapter_zero_never_matches() {
        // Page chapters are one-based; chapter 0 has no zero-based twin.
        let key = LessonKey::course("42", "short stories", 0);
        assert!(!matches_key(&key, &course_record("l1", 42, 0)));
    }

    #[test]
    fn test_matches_key_course_ignores_standalone_records() {
        let key = LessonKey::course("42", "short stories", 1);
        assert!(!matches_key(&key, &standalone_record("42")));
    }

    #[test]
    fn test_matches_key_standalone_by_lesson_id() {
        let key = LessonKey::standalone("abc123", "a trip");
        assert!(matches_key(&key, &standalone_record("abc123")));
        assert!(!matches_key(&key, &standalone_record("abc124")));
    }

    #[test]
    fn test_matches_key_standalone_matches_course_record_by_id() {
        // A standalone key matches on lesson id regardless of placement.
        let key = LessonKey::standalone("l1", "a trip");
        assert!(matches_key(&key, &course_record("l1", 42, 0)));
    }

    // ==================== Selection ====================

    #[test]
    fn test_select_lesson_unique_match() {
        let key = LessonKey::course("42", "short stories", 3);
        let result = search_result(vec![
            course_record("l1", 42, 1),
            course_record("l2", 42, 2),
            standalone_record("l3"),
        ]);

        let record = select_lesson(&key, result).unwrap();
        assert_eq!(record.id, "l2");
    }

    #[test]
    fn test_select_lesson_zero_matches_is_not_found() {
        let key = LessonKey::standalone("missing", "gone");
        let result = search_result(vec![standalone_record("l1")]);

        let err = select_lesson(&key, result).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::LessonNotFound {
                candidates: 1,
                matched: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_select_lesson_duplicate_matches_is_not_found() {
        // The catalog does not guarantee uniqueness; rather than silently
        // taking the first record in result order, duplicates are rejected.
        let key = LessonKey::standalone("dup", "twice");
        let result = search_result(vec![standalone_record("dup"), standalone_record("dup")]);

        let err = select_lesson(&key, result).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::LessonNotFound { matched: 2, .. }
        ));
    }

    #[test]
    fn test_select_lesson_empty_result_is_not_found() {
        let key = LessonKey::standalone("abc", "empty");
        let err = select_lesson(&key, search_result(vec![])).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::LessonNotFound { candidates: 0, .. }
        ));
    }

    // ==================== URL Construction ====================

    #[test]
    fn test_search_url_encodes_levels_and_query() {
        let resolver = CatalogResolver::with_base_url("https://catalog.test").unwrap();
        let url = resolver.search_url("short stories");
        assert!(url.starts_with("https://catalog.test/lessons.json?levels="));
        assert!(
            url.contains("upper%20intermediate"),
            "levels must be percent-encoded: {url}"
        );
        assert!(
            url.ends_with("&q=short%20stories"),
            "query must be percent-encoded: {url}"
        );
    }

    #[test]
    fn test_catalog_resolver_debug_omits_client() {
        let resolver = CatalogResolver::with_base_url("https://catalog.test").unwrap();
        let debug = format!("{resolver:?}");
        assert!(debug.contains("catalog.test"));
        assert!(!debug.contains("Client"), "client internals stay out: {debug}");
    }
}
