//! Serde models for the catalog search API.

use serde::Deserialize;

/// Top-level search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Matching lesson records, in catalog result order
    #[serde(default)]
    pub lessons: Vec<LessonRecord>,
    /// Pagination link; the resolver reads only the first page
    #[serde(default)]
    pub next_page_url: Option<String>,
}

/// A single lesson record from the catalog.
///
/// Course-based and standalone lessons share a superset of descriptive
/// fields; the two shapes differ only in [`Placement`]. Descriptive fields
/// the matching logic never touches are deserialized for passthrough and
/// diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct LessonRecord {
    /// Lesson id; the catalog serializes it as a string
    pub id: String,
    /// Display title, also the source of the suggested export filename
    pub title: String,
    /// Difficulty tier name
    #[serde(default)]
    pub level: Option<String>,
    /// Short description
    #[serde(default)]
    pub synopsis: Option<String>,
    /// Whether the lesson is free to access
    #[serde(default)]
    pub free: Option<bool>,
    #[serde(default)]
    pub large_image_url: Option<String>,
    #[serde(default)]
    pub thumb_image_url: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub release_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Address of the lesson's timed-word (CRD) document
    pub crd_url: String,
    /// Address of the lesson's audio asset
    pub audio_url: String,
    /// Course placement, discriminated by presence of the `course` object
    #[serde(flatten)]
    pub placement: Placement,
}

/// Where a lesson sits in the catalog.
///
/// Untagged: a record carrying a `course` object (and its zero-based
/// `course_position`) is course-based; anything else, including an explicit
/// `course: null`, is standalone.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Placement {
    /// Lesson belongs to a course
    Course {
        /// The embedded course object
        course: CourseRef,
        /// Zero-based position within the course; page addresses reference
        /// the same lesson with a one-based chapter number
        course_position: u32,
    },
    /// Lesson stands on its own
    Standalone {},
}

/// The course object embedded in course-based lesson records.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRef {
    /// Numeric course id; page addresses carry it stringified
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub lesson_count: Option<u32>,
    #[serde(default)]
    pub levels: Option<Vec<String>>,
}
