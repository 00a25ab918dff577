//! Shared User-Agent strings for catalog and download HTTP clients.
//!
//! Single source for project URL and UA format so search and download traffic
//! stay consistent and easy to update (good citizenship; RFC 9308).

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/lessonfetch/lessonfetch";

/// Default User-Agent for catalog API requests (identifies the lookup side).
#[must_use]
pub(crate) fn default_catalog_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("lessonfetch/{version} (lesson-lookup-tool; +{PROJECT_UA_URL})")
}

/// Default User-Agent for download requests (same format, distinct tag so the
/// two traffic kinds can be told apart in server logs).
#[must_use]
pub(crate) fn default_download_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("lessonfetch/{version} (lesson-export-tool; +{PROJECT_UA_URL})")
}
