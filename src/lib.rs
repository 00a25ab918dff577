//! Lessonfetch Core Library
//!
//! This library resolves a lesson identifier embedded in a catalog page
//! address into a canonical lesson record, assembles a plain-text transcript
//! from the lesson's timed-word document, and hands both the transcript and
//! the audio asset to a download sink.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`parser`] - Page-address parsing into a structured lesson key
//! - [`resolver`] - Catalog search and unique-record selection
//! - [`transcript`] - Timed-word document fetch and transcript assembly
//! - [`export`] - Orchestration of the full pipeline
//! - [`sink`] - Download sink contract and filesystem implementation

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod export;
pub mod parser;
pub mod resolver;
pub mod sink;
pub mod transcript;

mod http;
mod user_agent;

// Re-export commonly used types
pub use export::{ExportError, ExportOutcome, Exporter};
pub use parser::{LessonKey, LessonKind, ParseError, lesson_key_from_page};
pub use resolver::{CatalogResolver, LessonRecord, ResolveError, SearchResult};
pub use sink::{DownloadSink, FsSink, SavePayload, SaveRequest, SinkError};
pub use transcript::{TranscriptError, TranscriptFetcher};
