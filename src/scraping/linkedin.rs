// src/scraping/linkedin.rs
//! LinkedIn extractor. LinkedIn embeds a JSON-LD `JobPosting` object on
//! public job pages, which is far more stable than its class names, so
//! structured data is tried first and the selector arrays only cover
//! pages that ship without it.

use scraper::{Html, Selector};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::ScraperConfig;

use super::cleaner::{clean_job_html, normalize_text};
use super::error::ScrapeError;
use super::{browser, dom, keywords, non_empty, or_placeholder, sections};
use super::{JobPosting, Platform, PLACEHOLDER_COMPANY, PLACEHOLDER_TITLE};

const TITLE_SELECTORS: &[&str] = &[
    "h1.top-card-layout__title",
    "h1.topcard__title",
    ".job-details-jobs-unified-top-card__job-title",
    "h1[data-test-id='job-title']",
    ".jobs-unified-top-card__job-title",
];

const COMPANY_SELECTORS: &[&str] = &[
    "a.topcard__org-name-link",
    ".job-details-jobs-unified-top-card__company-name",
    ".top-card-layout__card .top-card-layout__second-subline",
    "a[data-test-id='job-poster-name']",
    ".jobs-unified-top-card__company-name",
];

const LOCATION_SELECTORS: &[&str] = &[
    "span.topcard__flavor--bullet",
    ".job-details-jobs-unified-top-card__bullet",
    ".top-card-layout__card .top-card-layout__first-subline",
    "[data-test-id='job-location']",
    ".jobs-unified-top-card__bullet",
    ".job-search-card__location",
];

const DESCRIPTION_SELECTORS: &[&str] = &[
    ".description__text",
    "section.show-more-less-html",
    ".jobs-box__html-content",
    ".jobs-description__container",
    ".jobs-description-content__text",
    "[data-test-id='job-description']",
    ".job-description",
];

pub async fn scrape(config: &ScraperConfig, url: &str) -> Result<JobPosting, ScrapeError> {
    info!(url, "scraping LinkedIn job posting");
    let html = browser::fetch_page(config, url).await?;
    parse(&html)
}

pub(crate) fn parse(html: &str) -> Result<JobPosting, ScrapeError> {
    let document = Html::parse_document(html);

    if let Some(posting) = from_json_ld(&document) {
        return Ok(posting);
    }

    let title = dom::select_text(&document, TITLE_SELECTORS)
        .or_else(|| dom::meta_content(&document, r#"meta[property="og:title"]"#))
        .or_else(|| title_from_page_title(&document));
    let company = dom::select_text(&document, COMPANY_SELECTORS);
    let location = dom::select_text(&document, LOCATION_SELECTORS);

    let Some(description_html) = dom::select_inner_html(&document, DESCRIPTION_SELECTORS) else {
        if dom::bot_wall_detected(&document) {
            return Err(ScrapeError::BotDetectionBlocked {
                platform: Platform::LinkedIn,
            });
        }
        return Err(ScrapeError::DescriptionNotFound {
            platform: Platform::LinkedIn,
        });
    };

    Ok(build_posting(title, company, location, &description_html))
}

/// Pulls the first JSON-LD `JobPosting` object out of the page, whether
/// it is the sole payload of a script block or one member of an array.
/// Objects without a usable description are skipped so selector
/// extraction still gets its chance.
fn from_json_ld(document: &Html) -> Option<JobPosting> {
    let selector = Selector::parse(r#"script[type="application/ld+json"]"#).ok()?;

    for script in document.select(&selector) {
        let raw = script.text().collect::<String>();
        let value: Value = match serde_json::from_str(raw.trim()) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "unparseable JSON-LD block skipped");
                continue;
            }
        };

        let job = match &value {
            Value::Array(items) => items.iter().find(|item| is_job_posting(item)),
            single if is_job_posting(single) => Some(&value),
            _ => None,
        };
        let Some(job) = job else { continue };

        let description =
            clean_job_html(job.get("description").and_then(Value::as_str).unwrap_or(""));
        if description.is_empty() {
            continue;
        }

        let title = string_field(job, "/title");
        let company = string_field(job, "/hiringOrganization/name");
        let location = string_field(job, "/jobLocation/address/addressLocality");

        return Some(assemble(title, company, location, description));
    }

    None
}

fn is_job_posting(value: &Value) -> bool {
    value.get("@type").and_then(Value::as_str) == Some("JobPosting")
}

fn string_field(value: &Value, pointer: &str) -> Option<String> {
    let text = normalize_text(value.pointer(pointer)?.as_str()?);
    (!text.is_empty()).then_some(text)
}

/// Page `<title>` is "Job Title | LinkedIn"-shaped on public pages.
fn title_from_page_title(document: &Html) -> Option<String> {
    let title = dom::page_title(document)?;
    let head = normalize_text(title.split('|').next().unwrap_or(""));
    (!head.is_empty()).then_some(head)
}

fn build_posting(
    title: Option<String>,
    company: Option<String>,
    location: Option<String>,
    description_html: &str,
) -> JobPosting {
    assemble(title, company, location, clean_job_html(description_html))
}

fn assemble(
    title: Option<String>,
    company: Option<String>,
    location: Option<String>,
    description: String,
) -> JobPosting {
    let requirements = sections::extract_sections(&description, keywords::REQUIREMENTS);
    let responsibilities = sections::extract_sections(&description, keywords::RESPONSIBILITIES);

    JobPosting {
        title: or_placeholder(title, PLACEHOLDER_TITLE),
        company: or_placeholder(company, PLACEHOLDER_COMPANY),
        location: location.filter(|l| !l.is_empty()),
        description,
        requirements: non_empty(requirements),
        responsibilities: non_empty(responsibilities),
        skills: None,
    }
}
