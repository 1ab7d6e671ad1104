// src/scraping/browser.rs
//! Scoped headless-browser resource. The job boards render content
//! client-side or behind anti-automation checks, so every extractor loads
//! its page through a real chromium instance. One [`PageSession`] per
//! scrape; the underlying process is heavyweight, so release on every
//! exit path is a strict invariant.

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::ScraperConfig;

use super::error::BrowserError;

pub(crate) struct PageSession {
    browser: Browser,
    event_task: JoinHandle<()>,
}

impl PageSession {
    /// Launches a dedicated browser process. Sessions are never shared
    /// between concurrent scrapes.
    pub(crate) async fn launch() -> Result<Self, BrowserError> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .build()
            .map_err(BrowserError::Launch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| BrowserError::Launch(e.to_string()))?;

        // The CDP event stream must be pumped for the connection to make
        // progress; it ends when the browser goes away.
        let event_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            event_task,
        })
    }

    /// Navigates to `url` with the configured user agent, waits for the
    /// load to settle, and returns the serialized DOM. The whole cycle is
    /// bounded by `config.page_timeout`.
    pub(crate) async fn fetch_html(
        &self,
        config: &ScraperConfig,
        url: &str,
    ) -> Result<String, BrowserError> {
        let navigate = async {
            let page = self.browser.new_page("about:blank").await?;
            page.set_user_agent(config.user_agent.as_str()).await?;
            page.goto(url).await?;
            page.wait_for_navigation().await?;
            // Late XHR-driven rendering lands after the load event.
            tokio::time::sleep(config.settle_delay).await;
            let html = page.content().await?;
            page.close().await?;
            Ok::<String, chromiumoxide::error::CdpError>(html)
        };

        match tokio::time::timeout(config.page_timeout, navigate).await {
            Ok(Ok(html)) => {
                debug!(url, bytes = html.len(), "page fetched");
                Ok(html)
            }
            Ok(Err(e)) => Err(BrowserError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Err(BrowserError::Timeout(config.page_timeout)),
        }
    }

    /// Shuts the browser down. Consumes the session so release happens
    /// exactly once on the happy path; `Drop` covers the rest.
    pub(crate) async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!(error = %e, "browser did not close cleanly");
        }
        let _ = self.browser.wait().await;
        self.event_task.abort();
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        // Covers error unwinds and cooperative cancellation: the event
        // task stops and dropping the inner Browser kills the chromium
        // child process.
        self.event_task.abort();
    }
}

/// Fetches one page through a fresh browser session, releasing the
/// session whether navigation succeeds or fails.
pub(crate) async fn fetch_page(config: &ScraperConfig, url: &str) -> Result<String, BrowserError> {
    let session = PageSession::launch().await?;
    let result = session.fetch_html(config, url).await;
    session.close().await;
    result
}
