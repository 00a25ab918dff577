//! Export orchestration: page address in, transcript and audio out.
//!
//! [`Exporter`] composes the parser, resolver, and transcript builder, then
//! emits two logical writes to a [`DownloadSink`]: the transcript as a
//! `data:` URI under `{name}.txt` and the audio source URL under
//! `{name}.mp3`. The sink is only invoked after both the transcript and the
//! audio reference exist, so a failed export never produces partial output.

mod error;

pub use error::ExportError;

use tracing::{debug, info};

use crate::parser::lesson_key_from_page;
use crate::resolver::CatalogResolver;
use crate::sink::{DownloadSink, SaveRequest};
use crate::transcript::TranscriptFetcher;

/// Result of a successful export, as handed to the sink.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Assembled transcript text
    pub transcript: String,
    /// Source address of the lesson's audio asset
    pub audio_url: String,
    /// Filename stem derived from the lesson title
    pub suggested_name: String,
}

/// Composes the full export pipeline.
pub struct Exporter {
    resolver: CatalogResolver,
    transcripts: TranscriptFetcher,
}

impl Exporter {
    /// Creates an exporter from its collaborators.
    #[must_use]
    pub fn new(resolver: CatalogResolver, transcripts: TranscriptFetcher) -> Self {
        Self {
            resolver,
            transcripts,
        }
    }

    /// Runs the full pipeline for one page address and issues both sink
    /// writes.
    ///
    /// Given the same page address and an unchanged remote catalog, the
    /// emitted transcript is byte-identical across invocations.
    ///
    /// # Errors
    ///
    /// Propagates the first failure from any stage; every error is terminal
    /// for the invocation and no partial output is written.
    #[tracing::instrument(skip(self, sink))]
    pub async fn export(
        &self,
        page_url: Option<&str>,
        sink: &dyn DownloadSink,
    ) -> Result<ExportOutcome, ExportError> {
        let key = lesson_key_from_page(page_url)?;
        let record = self.resolver.resolve(&key).await?;
        info!(lesson_id = %record.id, title = %record.title, "Resolved lesson record");

        let transcript = self.transcripts.build(&record).await?;
        let outcome = ExportOutcome {
            suggested_name: suggested_name(&record.title, &record.id),
            audio_url: record.audio_url,
            transcript,
        };
        debug!(
            suggested_name = %outcome.suggested_name,
            transcript_chars = outcome.transcript.chars().count(),
            "Export assembled"
        );

        sink.save(SaveRequest::data_uri(
            transcript_data_uri(&outcome.transcript),
            format!("{}.txt", outcome.suggested_name),
        ))
        .await?;
        sink.save(SaveRequest::remote_url(
            outcome.audio_url.clone(),
            format!("{}.mp3", outcome.suggested_name),
        ))
        .await?;

        Ok(outcome)
    }
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

/// Derives a filename stem from a lesson title.
///
/// Every character outside `[A-Za-z0-9]` and whitespace is stripped. A title
/// with no ASCII-alphanumeric characters at all (the usual case for a fully
/// Chinese title) would strip down to whitespace and yield hidden `.txt` and
/// `.mp3` filenames, so the lesson id stands in as the stem instead.
#[must_use]
pub fn suggested_name(title: &str, lesson_id: &str) -> String {
    let stem: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    if stem.trim().is_empty() {
        lesson_id.to_string()
    } else {
        stem
    }
}

/// Wraps transcript text in a percent-encoded `data:text/plain` URI.
#[must_use]
pub fn transcript_data_uri(text: &str) -> String {
    format!("data:text/plain;charset=UTF-8,{}", urlencoding::encode(text))
}
