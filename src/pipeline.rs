use tracing::{info, warn};

use crate::browser::{BrowserSession, TextSource};
use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::parser::dates::{normalize_date, DateOutcome};
use crate::parser::records::match_records;
use crate::records::{dedup_and_sort, VersionRecord};

/// Owns the scrape orchestration: one browser session per call, acquired at
/// the start and released on every exit path.
pub struct ExtractionPipeline {
    config: ScrapeConfig,
}

impl ExtractionPipeline {
    pub fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    /// Scrape one page and return its version records, newest date first.
    /// An empty list is a valid outcome; launch and navigation failures
    /// are not.
    pub async fn scrape(&self, url: &str) -> Result<Vec<VersionRecord>, ScrapeError> {
        let mut session = BrowserSession::launch(&self.config).await?;
        scrape_with(&mut session, url).await
    }
}

/// Drive one extraction run over an already-launched text source. The source
/// is closed exactly once, on every exit path including mid-extraction
/// failures.
pub async fn scrape_with<S: TextSource>(
    source: &mut S,
    url: &str,
) -> Result<Vec<VersionRecord>, ScrapeError> {
    let result = extract(source, url).await;
    source.close().await;
    result
}

async fn extract<S: TextSource>(
    source: &mut S,
    url: &str,
) -> Result<Vec<VersionRecord>, ScrapeError> {
    source.goto(url).await?;
    let texts = source.candidate_texts().await?;

    let mut found = Vec::new();
    for text in &texts {
        for (version, raw_date) in match_records(text) {
            let date = match normalize_date(&raw_date) {
                DateOutcome::Canonical(date) => date,
                DateOutcome::Fallback(date) => {
                    warn!("could not parse date: {}", date);
                    date
                }
            };
            info!("found version: {} - {}", version, date);
            found.push(VersionRecord {
                version,
                date,
                url: url.to_string(),
            });
        }
    }

    let records = dedup_and_sort(found);
    info!("scraped {} version entries from {}", records.len(), url);
    Ok(records)
}

// ── Tests ──
