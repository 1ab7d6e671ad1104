// src/scraping/wttj.rs
//! Welcome to the Jungle extractor. WTTJ exposes stable `data-testid`
//! hooks on job pages and phrases its section headers in its own way
//! ("Profile", "Mission"), hence the localized keyword sets.

use scraper::{ElementRef, Html, Selector};
use tracing::info;

use crate::config::ScraperConfig;

use super::cleaner::clean_job_html;
use super::error::ScrapeError;
use super::{browser, dom, keywords, non_empty, or_placeholder, sections};
use super::{JobPosting, Platform, PLACEHOLDER_COMPANY, PLACEHOLDER_TITLE};

const TITLE_SELECTORS: &[&str] = &["h1"];

const COMPANY_SELECTORS: &[&str] = &[
    r#"a[href*="/companies/"] h2"#,
    r#"a[href*="/companies/"] span"#,
    r#"a[href*="/companies/"]"#,
];

const LOCATION_SELECTORS: &[&str] = &[r#"[data-testid="job-metadata-location"]"#];

const DESCRIPTION_SELECTORS: &[&str] = &[
    r#"[data-testid="job-section-description"]"#,
    "section#section-description",
    ".job-description",
];

pub async fn scrape(config: &ScraperConfig, url: &str) -> Result<JobPosting, ScrapeError> {
    info!(url, "scraping Welcome to the Jungle job posting");
    let html = browser::fetch_page(config, url).await?;
    parse(&html)
}

pub(crate) fn parse(html: &str) -> Result<JobPosting, ScrapeError> {
    let document = Html::parse_document(html);

    let Some(description_html) = dom::select_inner_html(&document, DESCRIPTION_SELECTORS) else {
        if dom::bot_wall_detected(&document) {
            return Err(ScrapeError::BotDetectionBlocked {
                platform: Platform::WelcomeToTheJungle,
            });
        }
        return Err(ScrapeError::DescriptionNotFound {
            platform: Platform::WelcomeToTheJungle,
        });
    };

    let title = dom::select_text(&document, TITLE_SELECTORS);
    let company = dom::select_text(&document, COMPANY_SELECTORS);
    let location =
        dom::select_text(&document, LOCATION_SELECTORS).or_else(|| location_from_icon(&document));

    let description = clean_job_html(&description_html);
    let requirements = sections::extract_sections(&description, keywords::WTTJ_REQUIREMENTS);
    let responsibilities =
        sections::extract_sections(&description, keywords::WTTJ_RESPONSIBILITIES);

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

/// Older page layouts mark the location with an icon; the text lives in
/// the icon's parent element.
fn location_from_icon(document: &Html) -> Option<String> {
    let icon = Selector::parse("i.wttj-icon-location").ok()?;
    let element = document.select(&icon).next()?;
    let parent = ElementRef::wrap(element.parent()?)?;
    let text = dom::element_text(&parent);
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_extraction_with_testid_hooks() {
        let html = r#"<html><body>
            <h1>Développeur Backend</h1>
            <a href="/fr/companies/acme"><h2>Acme</h2></a>
            <span data-testid="job-metadata-location">Paris</span>
            <section data-testid="job-section-description">
                <p>Rejoignez-nous.</p>
                <h3>Mission</h3>
                <ul><li>Construire l'API</li></ul>
                <h3>Profile</h3>
                <ul><li>3 ans d'expérience</li></ul>
            </section>
            </body></html>"#;

        let posting = parse(html).unwrap();
        assert_eq!(posting.title, "Développeur Backend");
        assert_eq!(posting.company, "Acme");
        assert_eq!(posting.location.as_deref(), Some("Paris"));
        assert!(posting
            .responsibilities
            .as_ref()
            .unwrap()
            .contains(&"Construire l'API".to_string()));
        assert!(posting
            .requirements
            .as_ref()
            .unwrap()
            .contains(&"3 ans d'expérience".to_string()));
    }

    #[test]
    fn test_location_falls_back_to_icon_parent() {
        let html = r#"<html><body>
            <h1>Designer</h1>
            <div><i class="wttj-icon-location"></i> Nantes</div>
            <div class="job-description"><p>Pixels.</p></div>
            </body></html>"#;

        let posting = parse(html).unwrap();
        assert_eq!(posting.location.as_deref(), Some("Nantes"));
    }

    #[test]
    fn test_bot_wall_yields_bot_detection_error() {
        let html =
            "<html><body><p>Cloudflare is checking your connection.</p></body></html>";
        let err = parse(html).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::BotDetectionBlocked {
                platform: Platform::WelcomeToTheJungle
            }
        ));
    }

    #[test]
    fn test_missing_description_without_markers() {
        let html = "<html><body><h1>Company culture page</h1></body></html>";
        let err = parse(html).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::DescriptionNotFound {
                platform: Platform::WelcomeToTheJungle
            }
        ));
    }
}
