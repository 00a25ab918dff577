//! Catalog search and unique-record selection.
//!
//! The catalog has no direct-by-id lookup; the only way to a lesson record is
//! a free-text search across all difficulty tiers. This module provides:
//!
//! - [`CatalogResolver`] - issues the search and selects the unique record
//!   matching a [`crate::parser::LessonKey`]
//! - [`LessonRecord`] / [`SearchResult`] - serde models for the catalog's
//!   search response, with course-based and standalone lessons discriminated
//!   by the presence of the embedded `course` object
//! - [`ResolveError`] - structured failures (search transport, response
//!   schema, no unique match)

mod catalog;
mod error;
mod models;

pub use catalog::CatalogResolver;
pub use error::ResolveError;
pub use models::{CourseRef, LessonRecord, Placement, SearchResult};
