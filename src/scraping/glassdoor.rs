// src/scraping/glassdoor.rs
//! Glassdoor extractor. Glassdoor tags its job header with `data-test`
//! attributes; the employer name usually carries the star rating
//! ("Globex 4.5"), which is stripped before use.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::info;

use crate::config::ScraperConfig;

use super::cleaner::clean_job_html;
use super::error::ScrapeError;
use super::{browser, dom, keywords, non_empty, or_placeholder, sections};
use super::{JobPosting, Platform, PLACEHOLDER_COMPANY, PLACEHOLDER_TITLE};

const TITLE_SELECTORS: &[&str] = &[r#"[data-test="jobTitle"]"#, "h1"];

const COMPANY_SELECTORS: &[&str] = &[r#"[data-test="employerName"]"#];

const LOCATION_SELECTORS: &[&str] = &[r#"[data-test="location"]"#];

const DESCRIPTION_SELECTORS: &[&str] = &[".jobDescriptionContent", "#JobDescriptionContainer"];

/// Minimum text length for the large-div description fallback.
const FALLBACK_MIN_CHARS: usize = 500;

static TRAILING_RATING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d\.\d\s*$").unwrap());

pub async fn scrape(config: &ScraperConfig, url: &str) -> Result<JobPosting, ScrapeError> {
    info!(url, "scraping Glassdoor job posting");
    let html = browser::fetch_page(config, url).await?;
    parse(&html)
}

pub(crate) fn parse(html: &str) -> Result<JobPosting, ScrapeError> {
    let document = Html::parse_document(html);

    let description_html = dom::select_inner_html(&document, DESCRIPTION_SELECTORS)
        .or_else(|| fallback_description(&document));

    let Some(description_html) = description_html else {
        if dom::bot_wall_detected(&document) {
            return Err(ScrapeError::BotDetectionBlocked {
                platform: Platform::Glassdoor,
            });
        }
        return Err(ScrapeError::DescriptionNotFound {
            platform: Platform::Glassdoor,
        });
    };

    let title = dom::select_text(&document, TITLE_SELECTORS);
    let company = dom::select_text(&document, COMPANY_SELECTORS).map(|name| strip_rating(&name));
    let location = dom::select_text(&document, LOCATION_SELECTORS);

    let description = clean_job_html(&description_html);
    let requirements = sections::extract_sections(&description, keywords::REQUIREMENTS);
    let responsibilities = sections::extract_sections(&description, keywords::RESPONSIBILITIES);

    Ok(JobPosting {
        title: or_placeholder(title, PLACEHOLDER_TITLE),
        company: or_placeholder(company, PLACEHOLDER_COMPANY),
        location,
        description,
        requirements: non_empty(requirements),
        responsibilities: non_empty(responsibilities),
        skills: None,
    })
}

/// "Globex 4.5" → "Globex".
fn strip_rating(name: &str) -> String {
    TRAILING_RATING.replace(name, "").trim().to_string()
}

/// When the known description containers miss, take the first large div
/// that reads like a job description.
fn fallback_description(document: &Html) -> Option<String> {
    let divs = Selector::parse("div").ok()?;
    for div in document.select(&divs) {
        let text = dom::element_text(&div).to_lowercase();
        if text.chars().count() > FALLBACK_MIN_CHARS
            && (text.contains("responsibilities") || text.contains("requirements"))
        {
            return Some(div.inner_html());
        }
    }
    None
}
