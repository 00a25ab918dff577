//! Filesystem sink: writes text payloads and streams remote resources to disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, warn};

use crate::http::build_download_http_client;
use crate::user_agent;

use super::error::SinkError;
use super::{DownloadSink, SavePayload, SaveRequest};

/// Writes save requests into a target directory.
pub struct FsSink {
    client: Client,
    output_dir: PathBuf,
}

impl FsSink {
    /// Creates a sink writing into `output_dir`.
    ///
    /// The directory must already exist; callers create it up front so a
    /// failed export never leaves partial directory structure behind.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if HTTP client construction fails.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let client = build_download_http_client(&user_agent::default_download_user_agent())
            .map_err(|e| {
                SinkError::network("", &format!("HTTP client construction failed: {e}"))
            })?;
        Ok(Self {
            client,
            output_dir: output_dir.into(),
        })
    }

    async fn save_data_uri(&self, uri: &str, path: &Path) -> Result<(), SinkError> {
        let filename = path.to_string_lossy();
        let body = decode_data_uri(uri)
            .ok_or_else(|| SinkError::invalid_payload(&filename, "not a decodable data: URI"))?;
        tokio::fs::write(path, body.as_bytes())
            .await
            .map_err(|e| SinkError::io(path.to_path_buf(), e))?;
        debug!(path = %path.display(), bytes = body.len(), "Wrote text payload");
        Ok(())
    }

    async fn save_remote(&self, url: &str, path: &Path) -> Result<(), SinkError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, "Remote fetch failed");
            SinkError::network(url, "Cannot reach the remote host. Check your network connection.")
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::network(
                url,
                &format!("Remote host returned HTTP {}", status.as_u16()),
            ));
        }

        let mut file = File::create(path)
            .await
            .map_err(|e| SinkError::io(path.to_path_buf(), e))?;
        match stream_to_file(&mut file, response, url, path).await {
            Ok(bytes) => {
                debug!(path = %path.display(), bytes, "Streamed remote payload");
                Ok(())
            }
            Err(e) => {
                // A failed stream must not leave a partial file behind.
                drop(file);
                if let Err(cleanup_err) = tokio::fs::remove_file(path).await {
                    warn!(
                        error = %cleanup_err,
                        path = %path.display(),
                        "Could not remove partial file"
                    );
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl DownloadSink for FsSink {
    async fn save(&self, request: SaveRequest) -> Result<(), SinkError> {
        let path = self.output_dir.join(&request.filename);
        match &request.payload {
            SavePayload::DataUri(uri) => self.save_data_uri(uri, &path).await,
            SavePayload::RemoteUrl(url) => self.save_remote(url, &path).await,
        }
    }
}

impl std::fmt::Debug for FsSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsSink")
            .field("output_dir", &self.output_dir)
            .finish_non_exhaustive()
    }
}

/// Decodes a percent-encoded `data:` URI into its text body.
fn decode_data_uri(uri: &str) -> Option<String> {
    let rest = uri.strip_prefix("data:")?;
    let (_, body) = rest.split_once(',')?;
    urlencoding::decode(body).ok().map(std::borrow::Cow::into_owned)
}

/// Streams a response body to file, returning bytes written.
async fn stream_to_file(
    file: &mut File,
    response: reqwest::Response,
    url: &str,
    file_path: &Path,
) -> Result<u64, SinkError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| SinkError::network(url, &e.to_string()))?;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| SinkError::io(file_path.to_path_buf(), e))?;

        bytes_written += chunk.len() as u64;
    }

    // Ensure all data is flushed to disk
    writer
        .flush()
        .await
        .map_err(|e| SinkError::io(file_path.to_path_buf(), e))?;

    Ok(bytes_written)
}
