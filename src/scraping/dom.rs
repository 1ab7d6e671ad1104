// src/scraping/dom.rs
//! Selector helpers shared by the platform extractors. Each extractor
//! works from a priority list of selectors; the first match with
//! non-empty content wins and nothing is merged across strategies.

use scraper::{ElementRef, Html, Selector};

use super::cleaner::normalize_text;
use super::keywords;

/// Returns the normalized text of the first element matching any selector
/// in priority order, skipping empty matches.
pub(crate) fn select_text(document: &Html, selectors: &[&str]) -> Option<String> {
    for raw in selectors {
        let Ok(selector) = Selector::parse(raw) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = element_text(&element);
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Returns the inner HTML of the first element matching any selector in
/// priority order whose text content is non-empty.
pub(crate) fn select_inner_html(document: &Html, selectors: &[&str]) -> Option<String> {
    for raw in selectors {
        let Ok(selector) = Selector::parse(raw) else {
            continue;
        };
        for element in document.select(&selector) {
            if !element_text(&element).is_empty() {
                return Some(element.inner_html());
            }
        }
    }
    None
}

/// Reads the `content` attribute of the first element matching `selector`
/// (meta-tag lookups).
pub(crate) fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let content = document
        .select(&selector)
        .next()?
        .value()
        .attr("content")?;
    let content = normalize_text(content);
    (!content.is_empty()).then_some(content)
}

/// The document's `<title>` text.
pub(crate) fn page_title(document: &Html) -> Option<String> {
    select_text(document, &["title"])
}

pub(crate) fn element_text(element: &ElementRef) -> String {
    normalize_text(&element.text().collect::<Vec<_>>().join(" "))
}

/// True when the page looks like an anti-automation challenge instead of
/// content: a blocked-page title, or a known CAPTCHA vendor marker in the
/// body.
pub(crate) fn bot_wall_detected(document: &Html) -> bool {
    if let Some(title) = page_title(document) {
        if keywords::BLOCKED_PAGE_TITLES
            .iter()
            .any(|marker| title.contains(marker))
        {
            return true;
        }
    }

    let Some(body) = select_text(document, &["body"]) else {
        return false;
    };
    keywords::BOT_WALL_MARKERS
        .iter()
        .any(|marker| body.contains(marker))
}
