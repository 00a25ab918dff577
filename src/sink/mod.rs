//! Download sink contract and filesystem implementation.
//!
//! The export orchestrator does not persist anything itself; it emits logical
//! save requests to a [`DownloadSink`]. Retries and completion confirmation
//! are the sink's own business. [`FsSink`] is the filesystem implementation
//! used by the CLI.

mod error;
mod fs;

pub use error::SinkError;
pub use fs::FsSink;

use async_trait::async_trait;

/// Payload of a logical save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavePayload {
    /// Inline content carried as a percent-encoded `data:` URI
    DataUri(String),
    /// Remote resource the sink fetches itself
    RemoteUrl(String),
}

/// A single logical write handed to a sink.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    /// What to persist
    pub payload: SavePayload,
    /// Filename the sink should store the content under
    pub filename: String,
}

impl SaveRequest {
    /// Creates a request carrying inline content as a `data:` URI.
    #[must_use]
    pub fn data_uri(uri: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            payload: SavePayload::DataUri(uri.into()),
            filename: filename.into(),
        }
    }

    /// Creates a request pointing at a remote resource.
    #[must_use]
    pub fn remote_url(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            payload: SavePayload::RemoteUrl(url.into()),
            filename: filename.into(),
        }
    }
}

/// Trait that download sinks implement.
///
/// # Object Safety
///
/// This trait uses `async_trait` to support dynamic dispatch via
/// `&dyn DownloadSink`. Rust 2024 native async traits are not object-safe,
/// so `async_trait` is required for the orchestrator seam.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Persists one request.
    async fn save(&self, request: SaveRequest) -> Result<(), SinkError>;
}
