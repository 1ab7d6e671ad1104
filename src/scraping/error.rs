// src/scraping/error.rs
use std::time::Duration;
use thiserror::Error;

use super::Platform;

/// The closed set of failure kinds the scraping pipeline surfaces. None
/// of these is retried anywhere: the caller is expected to offer manual
/// text entry instead of hammering a potentially hostile remote site.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The input could not be parsed as a URL. Raised before any network
    /// activity.
    #[error("invalid job posting URL: {0}")]
    InvalidUrl(String),

    /// A platform extractor positively identified an anti-automation
    /// challenge page. Retrying is futile without different
    /// infrastructure.
    #[error("{platform} served an anti-bot challenge instead of the job posting")]
    BotDetectionBlocked { platform: Platform },

    /// Every selector missed and no bot-wall marker was found; the site's
    /// markup may have changed.
    #[error("could not locate a job description on the {platform} page")]
    DescriptionNotFound { platform: Platform },

    /// The generic fallback could not find or validate job-like content.
    #[error("the page does not look like a job offer")]
    NotAJobOffer,

    /// Transport-level failure (launch, navigation, timeout) on a
    /// platform-specific path. The generic path folds these into
    /// [`ScrapeError::NotAJobOffer`] instead.
    #[error(transparent)]
    Browser(#[from] BrowserError),
}

impl ScrapeError {
    /// One actionable message per kind, suitable for showing to the end
    /// user. Every kind directs to the manual-entry escape hatch; raw
    /// stack traces and remote markup never reach the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ScrapeError::InvalidUrl(_) => {
                "That doesn't look like a valid job posting URL. Check the link, or paste the job description manually."
            }
            ScrapeError::BotDetectionBlocked { .. } => {
                "The job board blocked automated access. Please switch to manual mode and paste the job description directly."
            }
            ScrapeError::DescriptionNotFound { .. } => {
                "We couldn't read the job description from that page. Please paste the job description manually."
            }
            ScrapeError::NotAJobOffer => {
                "That page doesn't appear to be a job offer. Double-check the URL, or paste the job description manually."
            }
            ScrapeError::Browser(_) => {
                "We couldn't load that page. Please try again later, or paste the job description manually."
            }
        }
    }
}

/// Failures of the scoped browser resource.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("failed to launch headless browser: {0}")]
    Launch(String),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("page load timed out after {0:?}")]
    Timeout(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_maps_to_manual_entry_guidance() {
        let errors = [
            ScrapeError::InvalidUrl("not a url".into()),
            ScrapeError::BotDetectionBlocked {
                platform: Platform::Indeed,
            },
            ScrapeError::DescriptionNotFound {
                platform: Platform::Glassdoor,
            },
            ScrapeError::NotAJobOffer,
            ScrapeError::Browser(BrowserError::Timeout(Duration::from_secs(60))),
        ];
        for error in errors {
            assert!(error.user_message().contains("manually"));
        }
    }

    #[test]
    fn test_display_names_the_platform() {
        let error = ScrapeError::BotDetectionBlocked {
            platform: Platform::LinkedIn,
        };
        assert!(error.to_string().contains("LinkedIn"));
    }
}
