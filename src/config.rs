use std::time::Duration;

/// News page the scraper targets when no URL is given.
pub const DEFAULT_TARGET_URL: &str = "https://www.dbf2002.com/news.html";

/// Settings that affect core scraping behavior. Everything else
/// (target URL, listen port) is plumbed per call.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Run Chrome without a window.
    pub headless: bool,
    /// Upper bound on the post-navigation readiness wait.
    pub readiness_timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            headless: true,
            readiness_timeout: Duration::from_secs(10),
        }
    }
}

impl ScrapeConfig {
    pub fn new(headless: bool, readiness_timeout: Duration) -> Self {
        Self {
            headless,
            readiness_timeout,
        }
    }
}
