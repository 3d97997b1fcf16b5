use thiserror::Error;

/// Fatal failure modes of one `scrape` call. Unparseable dates and empty
/// result sets are not errors and never surface here.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Chrome could not be started (missing binary, sandbox failure).
    #[error("failed to launch browser: {0}")]
    Launch(String),

    /// The page never produced its readiness marker within the bound.
    #[error("page did not become ready within {timeout_secs}s: {url}")]
    NavigationTimeout { url: String, timeout_secs: u64 },

    /// Anything else that went wrong while driving the page.
    #[error("extraction failed: {0}")]
    Extraction(String),
}

impl From<chromiumoxide::error::CdpError> for ScrapeError {
    fn from(e: chromiumoxide::error::CdpError) -> Self {
        ScrapeError::Extraction(e.to_string())
    }
}
