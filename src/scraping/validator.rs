// src/scraping/validator.rs
//! Content plausibility checks for the generic fallback path, plus the
//! block-scoring heuristic used to pick a description candidate on an
//! unknown page. All functions here are pure so thresholds and tie-break
//! behavior can be tested without a browser.

use super::keywords;

/// Minimum cleaned-description length for a page to count as a job offer.
const MIN_DESCRIPTION_CHARS: usize = 300;

/// Minimum number of distinct keyword hits for validation.
const MIN_KEYWORD_HITS: usize = 2;

/// Score added per distinct job keyword found in a block.
const KEYWORD_WEIGHT: u32 = 100;

/// Ceiling for the length-based part of a block score.
const LENGTH_BONUS_CAP: u32 = 500;

/// Lowercases and folds Latin accents to ASCII so French keywords match
/// regardless of how the page spells them ("compétences" == "competences").
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_lowercase().next().unwrap_or(c) {
            'à' | 'â' | 'ä' | 'á' | 'ã' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' | 'í' => 'i',
            'ô' | 'ö' | 'ó' | 'õ' => 'o',
            'ù' | 'û' | 'ü' | 'ú' => 'u',
            'ç' => 'c',
            'ÿ' => 'y',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// Decides whether extracted text is plausibly a job posting: long enough
/// and mentioning at least two distinct job-related keywords. This is the
/// only defense against scraping an arbitrary non-job page through the
/// generic fallback.
pub fn is_plausible_job_offer(text: &str) -> bool {
    if text.chars().count() < MIN_DESCRIPTION_CHARS {
        return false;
    }

    let folded = fold_diacritics(text);
    let hits = keywords::VALIDATION
        .iter()
        .filter(|keyword| folded.contains(&fold_diacritics(keyword)))
        .count();

    hits >= MIN_KEYWORD_HITS
}

/// Scores one candidate block: a fixed weight per distinct job keyword
/// present, plus a length bonus capped so sheer size cannot outweigh
/// keyword evidence.
pub fn score_block(text: &str) -> u32 {
    let folded = fold_diacritics(text);
    let keyword_score: u32 = keywords::BLOCK_SCORING
        .iter()
        .filter(|keyword| folded.contains(&fold_diacritics(keyword)))
        .count() as u32
        * KEYWORD_WEIGHT;

    let length_bonus = (text.chars().count() as u32 / 10).min(LENGTH_BONUS_CAP);

    keyword_score + length_bonus
}

/// Picks the highest-scoring candidate from `(text, candidate)` pairs.
/// Comparison is strictly-greater, so ties keep the first-seen candidate
/// and an all-zero field selects nothing.
pub fn best_scoring<T>(candidates: Vec<(String, T)>) -> Option<T> {
    let mut best: Option<(u32, T)> = None;

    for (text, candidate) in candidates {
        let score = score_block(&text);
        if score == 0 {
            continue;
        }
        match &best {
            Some((top, _)) if score <= *top => {}
            _ => best = Some((score, candidate)),
        }
    }

    best.map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(base: &str) -> String {
        format!("{} {}", base, "lorem ipsum dolor sit amet ".repeat(20))
    }

    #[test]
    fn test_short_text_rejected_regardless_of_keywords() {
        assert!(!is_plausible_job_offer(
            "requirements responsibilities skills apply"
        ));
    }

    #[test]
    fn test_two_keywords_accepted() {
        let text = padded("We list the responsibilities and the requirements of this position.");
        assert!(text.chars().count() >= 300);
        assert!(is_plausible_job_offer(&text));
    }

    #[test]
    fn test_one_keyword_rejected() {
        let text = padded("A page that only ever talks about responsibilities.");
        assert!(text.chars().count() >= 300);
        assert!(!is_plausible_job_offer(&text));
    }

    #[test]
    fn test_accented_french_keywords_match() {
        let text = padded("Vos missions chez nous, et les compétences attendues.");
        assert!(is_plausible_job_offer(&text));
    }

    #[test]
    fn test_keyword_weight_dominates_short_text() {
        let with_keywords = "requirements and responsibilities";
        let without = "nothing interesting here at all!!";
        assert!(score_block(with_keywords) > score_block(without));
    }

    #[test]
    fn test_length_bonus_is_capped() {
        let huge = "x".repeat(100_000);
        assert_eq!(score_block(&huge), 500);
    }

    #[test]
    fn test_best_scoring_prefers_keyword_block() {
        let picked = best_scoring(vec![
            ("plain filler text with no signal".to_string(), "a"),
            ("requirements, skills and responsibilities".to_string(), "b"),
        ]);
        assert_eq!(picked, Some("b"));
    }

    #[test]
    fn test_best_scoring_tie_keeps_first_seen() {
        let picked = best_scoring(vec![
            ("requirements listed here".to_string(), "first"),
            ("requirements listed here".to_string(), "second"),
        ]);
        assert_eq!(picked, Some("first"));
    }

    #[test]
    fn test_best_scoring_ignores_empty_candidates() {
        let picked: Option<&str> = best_scoring(vec![("".to_string(), "empty")]);
        assert_eq!(picked, None);
    }
}
