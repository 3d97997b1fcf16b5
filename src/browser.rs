use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Selector for the rendered elements whose visible text gets scanned.
/// Version entries sit in plain text inside headings, paragraphs or spans.
const CANDIDATE_SELECTOR: &str = "h2, h3, p, span";

/// The page-must-have-rendered marker the readiness wait polls for.
const READY_SELECTOR: &str = "body";

/// Narrow capability the pipeline drives: navigate, enumerate visible text,
/// release. Lets the rendering engine be swapped (or faked in tests) without
/// touching the matcher.
pub trait TextSource {
    async fn goto(&mut self, url: &str) -> Result<(), ScrapeError>;
    /// Visible text of every candidate element, in document order.
    async fn candidate_texts(&mut self) -> Result<Vec<String>, ScrapeError>;
    /// Idempotent; closing a never-opened or already-closed source is a no-op.
    async fn close(&mut self);
}

/// One Chrome process, owned for the duration of a single scrape call.
/// Sessions are never pooled or shared.
pub struct BrowserSession {
    browser: Option<Browser>,
    page: Option<Page>,
    handler_task: Option<JoinHandle<()>>,
    readiness_timeout: Duration,
}

impl BrowserSession {
    /// Launch Chrome with a fixed viewport and user agent. Fatal on failure;
    /// there is no retry.
    pub async fn launch(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .window_size(1920, 1080)
            .arg("--disable-dev-shm-usage")
            .arg("--disable-gpu")
            .arg(format!("--user-agent={}", USER_AGENT));
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(ScrapeError::Launch)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        // The CDP event stream must be drained for the connection to make progress.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        info!("browser launched (headless: {})", config.headless);
        Ok(Self {
            browser: Some(browser),
            page: None,
            handler_task: Some(handler_task),
            readiness_timeout: config.readiness_timeout,
        })
    }
}

impl TextSource for BrowserSession {
    async fn goto(&mut self, url: &str) -> Result<(), ScrapeError> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| ScrapeError::Extraction("session already closed".into()))?;

        info!("navigating to {}", url);
        let page = browser.new_page(url).await?;

        let bound = self.readiness_timeout;
        tokio::time::timeout(bound, async {
            loop {
                if page.find_element(READY_SELECTOR).await.is_ok() {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        })
        .await
        .map_err(|_| ScrapeError::NavigationTimeout {
            url: url.to_string(),
            timeout_secs: bound.as_secs(),
        })?;

        self.page = Some(page);
        Ok(())
    }

    async fn candidate_texts(&mut self) -> Result<Vec<String>, ScrapeError> {
        let page = self
            .page
            .as_ref()
            .ok_or_else(|| ScrapeError::Extraction("no loaded page".into()))?;

        let elements = page.find_elements(CANDIDATE_SELECTOR).await?;
        let mut texts = Vec::with_capacity(elements.len());
        for element in elements {
            if let Some(text) = element.inner_text().await? {
                if !text.trim().is_empty() {
                    texts.push(text);
                }
            }
        }
        Ok(texts)
    }

    async fn close(&mut self) {
        self.page = None;
        if let Some(mut browser) = self.browser.take() {
            if let Err(e) = browser.close().await {
                warn!("browser close failed: {}", e);
            }
            let _ = browser.wait().await;
            info!("browser closed");
        }
        if let Some(task) = self.handler_task.take() {
            task.abort();
        }
    }
}

impl Drop for BrowserSession {
    // chromiumoxide kills the child process when the Browser is dropped
    // unclosed; the event-drain task still has to be stopped here.
    fn drop(&mut self) {
        if let Some(task) = self.handler_task.take() {
            task.abort();
        }
    }
}
