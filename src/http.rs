//! Shared HTTP client construction policy.
//!
//! This module centralizes networking defaults in two profiles: a lookup
//! profile for the catalog resolver and transcript fetcher (small JSON
//! bodies, tight timeouts) and a download profile for the filesystem sink
//! (large audio bodies need a much wider total-request timeout).

use std::time::Duration;

use reqwest::Client;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 30;

/// Download timeouts for large files.
const DOWNLOAD_CONNECT_TIMEOUT_SECS: u64 = 30;
const DOWNLOAD_READ_TIMEOUT_SECS: u64 = 300;

/// Builds an HTTP client with the lookup profile.
///
/// # Errors
///
/// Returns [`reqwest::Error`] when client construction fails; callers map it
/// into their module error type.
pub(crate) fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    build(
        user_agent,
        CONNECT_TIMEOUT_SECS,
        READ_TIMEOUT_SECS,
    )
}

/// Builds an HTTP client with the download profile.
///
/// The total-request timeout covers the whole streamed body, so it is wide
/// enough for a multi-megabyte audio file on a slow link.
///
/// # Errors
///
/// Returns [`reqwest::Error`] when client construction fails.
pub(crate) fn build_download_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    build(
        user_agent,
        DOWNLOAD_CONNECT_TIMEOUT_SECS,
        DOWNLOAD_READ_TIMEOUT_SECS,
    )
}

fn build(
    user_agent: &str,
    connect_timeout_secs: u64,
    read_timeout_secs: u64,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .timeout(Duration::from_secs(read_timeout_secs))
        .user_agent(user_agent)
        .gzip(true)
        .build()
}
