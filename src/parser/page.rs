//! Lesson-key extraction from catalog page addresses.

use tracing::{debug, trace};
use url::Url;

use super::error::ParseError;
use super::key::LessonKey;

/// Path segment naming course lesson pages.
const COURSES_SEGMENT: &str = "courses";
/// Path segment naming standalone lesson pages.
const LESSONS_SEGMENT: &str = "lessons";

/// Derives a [`LessonKey`] from a catalog page address.
///
/// The address must have the shape `/{courses|lessons}/{id}-{title-words...}`;
/// course pages additionally require a one-based `chapter` query parameter.
/// The sub-tokens after the id, rejoined with spaces, become the key's title
/// hint (a search query, not a match key).
///
/// # Errors
///
/// - [`ParseError::MissingUrl`] when `page_url` is `None` (no page context)
/// - [`ParseError::MalformedPath`] for every other shape violation: an
///   unparseable address, an empty last segment, a missing id, a kind segment
///   other than `courses`/`lessons`, or a course path whose `chapter` is
///   missing or not an integer
///
/// # Examples
///
/// ```
/// use lessonfetch::parser::{LessonKind, lesson_key_from_page};
///
/// let key =
///     lesson_key_from_page(Some("https://example.com/courses/42-short-stories?chapter=3"))
///         .unwrap();
/// assert_eq!(key.kind, LessonKind::Course { chapter: 3 });
/// assert_eq!(key.id, "42");
/// assert_eq!(key.title_hint, "short stories");
/// ```
#[tracing::instrument]
pub fn lesson_key_from_page(page_url: Option<&str>) -> Result<LessonKey, ParseError> {
    let raw = page_url.ok_or_else(ParseError::missing_url)?;
    let url = Url::parse(raw).map_err(|e| ParseError::invalid_url(raw, &e.to_string()))?;

    let segments: Vec<&str> = url
        .path_segments()
        .map(Iterator::collect)
        .unwrap_or_default();

    let last = segments
        .last()
        .copied()
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| ParseError::empty_segment(raw))?;

    let mut tokens = last.split('-');
    let id = tokens
        .next()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ParseError::missing_id(raw))?;
    let title_hint = tokens.collect::<Vec<_>>().join(" ");
    trace!(id, title_hint, "split lesson segment");

    let kind_segment = segments
        .len()
        .checked_sub(2)
        .and_then(|index| segments.get(index))
        .copied()
        .unwrap_or_default();

    let key = match kind_segment {
        COURSES_SEGMENT => {
            let chapter = chapter_param(&url).ok_or_else(|| ParseError::missing_chapter(raw))?;
            let chapter = chapter
                .parse::<u32>()
                .map_err(|_| ParseError::invalid_chapter(raw, &chapter))?;
            LessonKey::course(id, title_hint, chapter)
        }
        LESSONS_SEGMENT => LessonKey::standalone(id, title_hint),
        other => return Err(ParseError::unknown_kind(raw, other)),
    };

    debug!(key = %key, "parsed lesson key");
    Ok(key)
}

/// Reads the `chapter` query parameter, if present.
fn chapter_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == "chapter")
        .map(|(_, value)| value.into_owned())
}
