// src/scraping/cleaner.rs
//! HTML-to-text normalization. Every description the pipeline emits goes
//! through [`clean_job_html`], which is the single chokepoint guaranteeing
//! downstream consumers never see raw markup.

use regex::Regex;
use ego_tree::NodeRef;
use scraper::{Html, Node};
use std::sync::LazyLock;

/// Elements whose entire subtree is noise for a job description.
const STRIPPED_TAGS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "button", "noscript",
];

/// Elements that end a visual line; a newline is emitted after each so the
/// plain text keeps the paragraph structure the tags carried.
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol",
];

static HORIZONTAL_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").unwrap());

/// Converts an HTML fragment into structured, readable plain text:
/// noise elements removed, list items bulleted, block structure preserved
/// as newlines, whitespace collapsed (at most one blank line between
/// paragraphs). Pure and deterministic; the output contains no tags.
pub fn clean_job_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);

    let mut text = String::new();
    render_children(fragment.tree.root(), &mut text);

    let text = text.replace('\u{a0}', " ");
    let text = HORIZONTAL_WS.replace_all(&text, " ");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Squeezes all whitespace runs in a single-line field (title, company,
/// location) down to single spaces.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn render_children(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text),
            Node::Element(element) => {
                let name = element.name();
                if STRIPPED_TAGS.contains(&name) || is_page_chrome(&element) {
                    continue;
                }
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                if name == "li" {
                    out.push_str("• ");
                }
                render_children(child, out);
                if BLOCK_TAGS.contains(&name) {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

/// Cookie banners and ARIA landmark chrome that survives tag filtering.
fn is_page_chrome(element: &scraper::node::Element) -> bool {
    if matches!(element.attr("role"), Some("banner") | Some("navigation")) {
        return true;
    }
    element
        .attr("class")
        .is_some_and(|classes| classes.contains("cookie-banner"))
}
