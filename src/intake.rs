// src/intake.rs
//! Job-input intake: the step sitting in front of the scraper. A job can
//! arrive as a URL (scraped) or as pasted text — the escape hatch every
//! scrape failure directs the user to.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::info;

use crate::config::ScraperConfig;
use crate::scraping::{self, JobPosting, ScrapeError, PLACEHOLDER_COMPANY, PLACEHOLDER_TITLE};

/// Pasted descriptions shorter than this cannot be analyzed meaningfully.
const MIN_TEXT_CHARS: usize = 50;

/// Guard against pasting an entire page dump.
const MAX_TEXT_CHARS: usize = 50_000;

/// How many leading lines are searched for a title/company pattern.
const METADATA_SCAN_LINES: usize = 5;

static TITLE_AT_COMPANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)\s+(?:at|@)\s+(.+?)$").unwrap());
static LABELED_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:job title|position):\s*(.+?)$").unwrap());

/// One job submission from the user.
#[derive(Debug, Clone)]
pub enum JobInput {
    /// A job-board URL to scrape.
    Url(String),
    /// A job description pasted verbatim.
    Text(String),
}

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error("job description is too short ({0} characters); paste the complete posting")]
    TextTooShort(usize),

    #[error("job description is too long ({0} characters); paste only the posting itself")]
    TextTooLong(usize),
}

impl IntakeError {
    pub fn user_message(&self) -> String {
        match self {
            IntakeError::Scrape(e) => e.user_message().to_string(),
            IntakeError::TextTooShort(_) => {
                "Job description is too short. Please provide a complete job posting.".to_string()
            }
            IntakeError::TextTooLong(_) => {
                "Job description is too long (max 50,000 characters).".to_string()
            }
        }
    }
}

/// Turns a user submission into a [`JobPosting`], scraping URLs and
/// validating pasted text.
pub async fn ingest(config: &ScraperConfig, input: JobInput) -> Result<JobPosting, IntakeError> {
    match input {
        JobInput::Url(url) => Ok(scraping::scrape_job(config, &url).await?),
        JobInput::Text(text) => ingest_text(&text),
    }
}

/// Accepts pasted job text: bounds-checked, with title and company
/// recovered from the first lines when the paste includes them.
pub fn ingest_text(text: &str) -> Result<JobPosting, IntakeError> {
    let description = text.trim();
    let chars = description.chars().count();
    if chars < MIN_TEXT_CHARS {
        return Err(IntakeError::TextTooShort(chars));
    }
    if chars > MAX_TEXT_CHARS {
        return Err(IntakeError::TextTooLong(chars));
    }

    let (title, company) = extract_metadata(description);
    info!(%title, %company, "accepted pasted job description");

    Ok(JobPosting {
        title,
        company,
        location: None,
        description: description.to_string(),
        requirements: None,
        responsibilities: None,
        skills: None,
    })
}

/// Line heuristics over the head of the paste: "Title at Company",
/// "Job title: X" / "Position: X", else first line as title and second
/// as company.
fn extract_metadata(text: &str) -> (String, String) {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(METADATA_SCAN_LINES)
        .collect();

    let mut title = String::new();
    let mut company = String::new();

    for (index, line) in lines.iter().enumerate() {
        if let Some(captures) = TITLE_AT_COMPANY.captures(line) {
            title = captures[1].trim().to_string();
            company = captures[2].trim().to_string();
            break;
        }
        if let Some(captures) = LABELED_TITLE.captures(line) {
            title = captures[1].trim().to_string();
            continue;
        }

        if index == 0 && title.is_empty() {
            title = line.to_string();
        }
        if index == 1 && company.is_empty() {
            company = line.to_string();
        }
    }

    (
        scraping::or_placeholder(Some(title), PLACEHOLDER_TITLE),
        scraping::or_placeholder(Some(company), PLACEHOLDER_COMPANY),
    )
}
