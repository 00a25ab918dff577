//! Transcript assembly from timed-word (CRD) documents.
//!
//! Every lesson record points at a CRD document: a JSON resource holding the
//! lesson's ordered word tokens plus timing and translation metadata. Only
//! `words[].hanzi` feeds the transcript; everything else is ignored. Tokens
//! are concatenated with no separator, preserving source order exactly.

mod error;

pub use error::TranscriptError;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::http::build_http_client;
use crate::resolver::LessonRecord;
use crate::user_agent;

/// A timed-word document fetched from a record's `crd_url`.
///
/// Timing arrays and sentence data are present in real documents but unused
/// here, so they are not modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct TimedWordDocument {
    /// Ordered word tokens; absent in schema-violating documents
    #[serde(default)]
    pub words: Option<Vec<TimedWord>>,
    /// Document format version, kept for diagnostics
    #[serde(default)]
    pub version: Option<u32>,
}

/// A single word token. Pinyin, meaning, and per-word metadata are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TimedWord {
    /// The text token contributed to the transcript
    pub hanzi: String,
}

/// Fetches timed-word documents and assembles transcripts.
pub struct TranscriptFetcher {
    client: Client,
}

impl TranscriptFetcher {
    /// Creates a fetcher with the shared HTTP client policy.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError`] if HTTP client construction fails.
    pub fn new() -> Result<Self, TranscriptError> {
        let client = build_http_client(&user_agent::default_catalog_user_agent())
            .map_err(|e| {
                TranscriptError::fetch("", &format!("HTTP client construction failed: {e}"))
            })?;
        Ok(Self { client })
    }

    /// Fetches the record's CRD document and concatenates its word tokens.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError::Fetch`] when the document cannot be
    /// retrieved or parsed, and [`TranscriptError::MissingWords`] when the
    /// document carries no `words` sequence.
    #[tracing::instrument(skip(self, record), fields(crd_url = %record.crd_url))]
    pub async fn build(&self, record: &LessonRecord) -> Result<String, TranscriptError> {
        let document = self.fetch_document(&record.crd_url).await?;
        let transcript = assemble(&record.crd_url, &document)?;
        debug!(chars = transcript.chars().count(), "Assembled transcript");
        Ok(transcript)
    }

    async fn fetch_document(&self, url: &str) -> Result<TimedWordDocument, TranscriptError> {
        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "Timed-word document request failed");
                return Err(TranscriptError::fetch(
                    url,
                    "Cannot reach the document host. Check your network connection.",
                ));
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Timed-word document fetch error");
            return Err(TranscriptError::fetch(
                url,
                &format!("Document host returned HTTP {}", status.as_u16()),
            ));
        }

        response.json::<TimedWordDocument>().await.map_err(|e| {
            warn!(error = %e, "Failed to parse timed-word document JSON");
            TranscriptError::fetch(url, "Unexpected timed-word document format")
        })
    }
}

impl std::fmt::Debug for TranscriptFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptFetcher").finish_non_exhaustive()
    }
}

/// Concatenates word tokens with no separator, preserving source order.
fn assemble(url: &str, document: &TimedWordDocument) -> Result<String, TranscriptError> {
    let words = document
        .words
        .as_ref()
        .ok_or_else(|| TranscriptError::missing_words(url))?;
    Ok(words.iter().map(|word| word.hanzi.as_str()).collect())
}
