//! Types representing a parsed lesson identifier.

use std::fmt;

/// How a page address places a lesson within the catalog.
///
/// A course reference is unresolvable without its chapter, so the chapter
/// lives inside the variant rather than as a separate optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonKind {
    /// Lesson inside a course; `chapter` is the one-based position taken from
    /// the page address.
    Course {
        /// One-based chapter number from the `chapter` query parameter
        chapter: u32,
    },
    /// Lesson published on its own
    Standalone,
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Course { chapter } => write!(f, "course chapter {chapter}"),
            Self::Standalone => write!(f, "standalone"),
        }
    }
}

/// A stable lesson lookup key derived from a page address.
///
/// Immutable once parsed. `title_hint` is only ever used as a free-text
/// search query, never as a match key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonKey {
    /// Course or standalone placement
    pub kind: LessonKind,
    /// Lesson or course id from the page address (course pages carry the
    /// course id, standalone pages the lesson id)
    pub id: String,
    /// Human-readable remainder of the last path segment, joined with spaces
    pub title_hint: String,
}

impl LessonKey {
    /// Creates a key for a lesson inside a course.
    #[must_use]
    pub fn course(id: impl Into<String>, title_hint: impl Into<String>, chapter: u32) -> Self {
        Self {
            kind: LessonKind::Course { chapter },
            id: id.into(),
            title_hint: title_hint.into(),
        }
    }

    /// Creates a key for a standalone lesson.
    #[must_use]
    pub fn standalone(id: impl Into<String>, title_hint: impl Into<String>) -> Self {
        Self {
            kind: LessonKind::Standalone,
            id: id.into(),
            title_hint: title_hint.into(),
        }
    }
}

impl fmt::Display for LessonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.id)
    }
}
