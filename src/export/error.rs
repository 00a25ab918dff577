//! Error type for the export pipeline.
//!
//! Every stage keeps its own structured error; the orchestrator only
//! aggregates them so callers can match on the failing stage.

use thiserror::Error;

use crate::parser::ParseError;
use crate::resolver::ResolveError;
use crate::sink::SinkError;
use crate::transcript::TranscriptError;

/// Errors surfaced by the export pipeline.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Page address could not be parsed into a lesson key
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Lesson key could not be resolved to a unique record
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Transcript could not be assembled
    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    /// A sink write failed
    #[error(transparent)]
    Sink(#[from] SinkError),
}
