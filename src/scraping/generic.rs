// src/scraping/generic.rs
//! Platform-agnostic fallback for job boards without a dedicated
//! extractor. Unlike the platform extractors, which trust their
//! site-specific selectors, this path has to prove the page is a job
//! offer at all: the chosen content block must pass the validator, and
//! every failure surfaces as the same user-actionable error.

use scraper::{Html, Selector};
use tracing::{info, warn};

use crate::config::ScraperConfig;

use super::cleaner::{clean_job_html, normalize_text};
use super::error::ScrapeError;
use super::validator::{best_scoring, is_plausible_job_offer};
use super::{browser, dom, keywords, non_empty, or_placeholder, sections};
use super::{JobPosting, PLACEHOLDER_COMPANY, PLACEHOLDER_TITLE};

/// Semantic containers tried before any heuristic scoring.
const MAIN_CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    r#"[role="main"]"#,
    "#main",
    ".main",
    "#content",
    ".content",
];

const COMPANY_SELECTORS: &[&str] = &[
    ".company-name, .employer-name, [itemprop='hiringOrganization']",
    ".card-block-company h3, .company-profile h1, .company-profile h2",
];

pub async fn scrape(config: &ScraperConfig, url: &str) -> Result<JobPosting, ScrapeError> {
    info!(url, "no dedicated extractor for this host, using generic fallback");

    let html = match browser::fetch_page(config, url).await {
        Ok(html) => html,
        Err(e) => {
            // The caller gets one uniform answer on this path, whatever
            // actually went wrong underneath.
            warn!(url, error = %e, "generic fetch failed");
            return Err(ScrapeError::NotAJobOffer);
        }
    };

    parse(&html)
}

pub(crate) fn parse(html: &str) -> Result<JobPosting, ScrapeError> {
    let document = Html::parse_document(html);

    let description_html = dom::select_inner_html(&document, MAIN_CONTENT_SELECTORS)
        .or_else(|| best_block(&document));

    let Some(description_html) = description_html else {
        return Err(ScrapeError::NotAJobOffer);
    };

    let description = clean_job_html(&description_html);
    if !is_plausible_job_offer(&description) {
        return Err(ScrapeError::NotAJobOffer);
    }

    let title = dom::select_text(&document, &["h1"]).or_else(|| title_from_page_title(&document));
    let company = dom::meta_content(&document, r#"meta[property="og:site_name"]"#)
        .or_else(|| dom::meta_content(&document, r#"meta[name="author"]"#))
        .or_else(|| dom::select_text(&document, COMPANY_SELECTORS));

    let requirements = sections::extract_sections(&description, keywords::REQUIREMENTS);
    let responsibilities = sections::extract_sections(&description, keywords::RESPONSIBILITIES);

    Ok(JobPosting {
        title: or_placeholder(title, PLACEHOLDER_TITLE),
        company: or_placeholder(company, PLACEHOLDER_COMPANY),
        location: None,
        description,
        requirements: non_empty(requirements),
        responsibilities: non_empty(responsibilities),
        skills: None,
    })
}

/// Scores every `div`/`section` on the page and returns the inner HTML of
/// the winner. The scoring itself lives in the validator module so its
/// thresholds and tie-break are testable without a page.
fn best_block(document: &Html) -> Option<String> {
    let selector = Selector::parse("div, section").ok()?;
    let candidates = document
        .select(&selector)
        .map(|element| (dom::element_text(&element), element.inner_html()))
        .collect();
    best_scoring(candidates)
}

/// "Job Title | Site" or "Job Title - Site" → "Job Title".
fn title_from_page_title(document: &Html) -> Option<String> {
    let title = dom::page_title(document)?;
    let head = title.split('|').next().unwrap_or("");
    let head = normalize_text(head.split('-').next().unwrap_or(""));
    (!head.is_empty()).then_some(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_about_page_is_not_a_job_offer() {
        let html = r#"<html><head><title>About | Acme</title></head><body>
            <div>We are a family business founded in 1952, proudly serving
            the greater Lyon area with artisanal cheese.</div>
            </body></html>"#;

        let err = parse(html).unwrap_err();
        assert!(matches!(err, ScrapeError::NotAJobOffer));
    }

    #[test]
    fn test_scored_block_with_sections_is_accepted() {
        let filler = "We are growing fast and looking for someone great. ".repeat(8);
        let html = format!(
            r#"<html><head><title>Backend Engineer - Acme Careers</title>
            <meta property="og:site_name" content="Acme"></head><body>
            <div class="posting">
                <p>{filler}</p>
                <p>Requirements: 5 years Go experience.</p>
                <ul><li>Go and gRPC</li><li>Postgres</li></ul>
                <p>Responsibilities: own the payments service.</p>
                <ul><li>Run the payments service</li></ul>
                <p>Apply today.</p>
            </div>
            </body></html>"#
        );

        let posting = parse(&html).unwrap();
        assert_eq!(posting.title, "Backend Engineer");
        assert_eq!(posting.company, "Acme");
        assert!(posting
            .requirements
            .as_ref()
            .unwrap()
            .contains(&"Go and gRPC".to_string()));
        assert!(posting
            .responsibilities
            .as_ref()
            .unwrap()
            .contains(&"Run the payments service".to_string()));
    }

    #[test]
    fn test_semantic_main_container_preferred_over_scoring() {
        let filler = "responsibilities requirements skills apply benefits. ".repeat(10);
        let html = format!(
            r#"<html><body>
            <main><p>The real description. {filler}</p></main>
            <div class="noise"><p>Unrelated but long block. {filler}</p></div>
            </body></html>"#
        );

        let posting = parse(&html).unwrap();
        assert!(posting.description.contains("The real description."));
        assert!(!posting.description.contains("Unrelated"));
    }

    #[test]
    fn test_page_without_any_candidate_fails() {
        let html = "<html><body><span>bare inline text</span></body></html>";
        let err = parse(html).unwrap_err();
        assert!(matches!(err, ScrapeError::NotAJobOffer));
    }

    #[test]
    fn test_accented_french_posting_validates() {
        let filler = "Nous recherchons un profil motivé pour rejoindre l'équipe. ".repeat(6);
        let html = format!(
            r#"<html><body>
            <div class="offre">
                <p>{filler}</p>
                <p>Vos missions et les compétences attendues sont listées ci-dessous.</p>
            </div>
            </body></html>"#
        );

        let posting = parse(&html).unwrap();
        assert!(posting.description.contains("missions"));
    }
}
