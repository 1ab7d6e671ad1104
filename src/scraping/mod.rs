// src/scraping/mod.rs
//! Job-posting ingestion pipeline: URL-based platform dispatch,
//! per-platform DOM extraction, HTML-to-text cleaning, heuristic section
//! extraction and a validated generic fallback for unknown sites.

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::config::ScraperConfig;

pub mod browser;
pub mod cleaner;
pub mod dom;
pub mod error;
pub mod generic;
pub mod glassdoor;
pub mod indeed;
pub mod keywords;
pub mod linkedin;
pub mod sections;
pub mod validator;
pub mod wttj;

pub use error::{BrowserError, ScrapeError};

/// Substituted when a page yields no usable job title.
pub const PLACEHOLDER_TITLE: &str = "Job Position";

/// Substituted when a page yields no usable company name.
pub const PLACEHOLDER_COMPANY: &str = "Company";

/// Normalized output record of the scraping pipeline. Held in memory for
/// one scrape invocation and handed to the analysis step; the pipeline
/// itself keeps no state across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    /// Plain text, never empty (placeholder-substituted).
    pub title: String,
    /// Plain text, never empty (placeholder-substituted).
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Cleaned plain text; always produced by the HTML normalizer.
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// The closed set of supported sources. Each variant has exactly one
/// extraction function; the dispatcher is a pure mapping from hostname to
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    LinkedIn,
    Indeed,
    Glassdoor,
    WelcomeToTheJungle,
    Generic,
}

impl Platform {
    /// Routes a hostname to a platform by substring, in priority order.
    fn for_host(host: &str) -> Self {
        if host.contains("linkedin.com") {
            Platform::LinkedIn
        } else if host.contains("indeed.com") {
            Platform::Indeed
        } else if host.contains("glassdoor.com") {
            Platform::Glassdoor
        } else if host.contains("welcometothejungle.com") {
            Platform::WelcomeToTheJungle
        } else {
            Platform::Generic
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Indeed => "Indeed",
            Platform::Glassdoor => "Glassdoor",
            Platform::WelcomeToTheJungle => "Welcome to the Jungle",
            Platform::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// Resolves the platform for a user-supplied URL without touching the
/// network. Malformed input fails here with [`ScrapeError::InvalidUrl`].
pub fn platform_for_url(url: &str) -> Result<Platform, ScrapeError> {
    let parsed = Url::parse(url).map_err(|_| ScrapeError::InvalidUrl(url.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| ScrapeError::InvalidUrl(url.to_string()))?
        .to_ascii_lowercase();
    Ok(Platform::for_host(&host))
}

/// Central entry point: detects the platform from the URL and runs the
/// matching extractor. The first extractor's error is propagated
/// unchanged; there is no retry across platforms.
pub async fn scrape_job(config: &ScraperConfig, url: &str) -> Result<JobPosting, ScrapeError> {
    let platform = platform_for_url(url)?;
    info!(%platform, url, "dispatching job scrape");

    match platform {
        Platform::LinkedIn => linkedin::scrape(config, url).await,
        Platform::Indeed => indeed::scrape(config, url).await,
        Platform::Glassdoor => glassdoor::scrape(config, url).await,
        Platform::WelcomeToTheJungle => wttj::scrape(config, url).await,
        Platform::Generic => generic::scrape(config, url).await,
    }
}

/// Zero extracted items are represented as absence, not an empty list.
pub(crate) fn non_empty(items: Vec<String>) -> Option<Vec<String>> {
    (!items.is_empty()).then_some(items)
}

/// Missing single-value fields degrade to a placeholder instead of
/// failing the scrape; only a missing description is fatal.
pub(crate) fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => placeholder.to_string(),
    }
}
