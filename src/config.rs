// src/config.rs
use std::time::Duration;

/// Desktop Chrome user agent presented to job boards; several of them
/// serve stripped-down or challenge pages to anything that looks headless.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Tunables for the scraping pipeline.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// User agent string the browser presents.
    pub user_agent: String,
    /// Upper bound on the whole navigate-and-read cycle for one page.
    pub page_timeout: Duration,
    /// Grace period after the load event so client-side rendering settles
    /// before the DOM is read back.
    pub settle_delay: Duration,
}

impl ScraperConfig {
    pub fn new() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_timeout: Duration::from_secs(60),
            settle_delay: Duration::from_secs(2),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_page_timeout(mut self, timeout: Duration) -> Self {
        self.page_timeout = timeout;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScraperConfig::default();
        assert_eq!(config.page_timeout, Duration::from_secs(60));
        assert!(config.user_agent.contains("Chrome"));
    }

    #[test]
    fn test_builders_override_fields() {
        let config = ScraperConfig::new()
            .with_page_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent");
        assert_eq!(config.page_timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
    }
}
