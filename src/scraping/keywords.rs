// src/scraping/keywords.rs
//! Keyword lists used by the validator, the block-scoring heuristic and
//! the section extractor. Kept as data so additional locales can be added
//! without touching extraction logic.

/// Bilingual (English + French) keywords used to decide whether a page is
/// plausibly a job offer. Matched accent- and case-insensitively.
pub const VALIDATION: &[&str] = &[
    "responsibilities",
    "requirements",
    "qualifications",
    "experience",
    "skills",
    "job",
    "role",
    "apply",
    "missions",
    "profil",
    "competences",
    "postuler",
    "offre",
    "recrutement",
];

/// Keywords used when scoring candidate description blocks on an unknown
/// page. Broader than [`VALIDATION`]: benefits sections are a strong
/// signal for block selection but too common to validate on.
pub const BLOCK_SCORING: &[&str] = &[
    "responsibilities",
    "requirements",
    "qualifications",
    "experience",
    "benefits",
    "apply",
    "skills",
    "missions",
    "profil",
    "compétences",
    "postuler",
    "offre",
    "recrutement",
];

/// Section-header keywords for the requirements list.
pub const REQUIREMENTS: &[&str] = &["requirements", "qualifications", "what you bring", "skills"];

/// Section-header keywords for the responsibilities list.
pub const RESPONSIBILITIES: &[&str] =
    &["responsibilities", "what you will do", "the role", "key tasks"];

/// Section-header keywords for the skills list (Indeed only).
pub const SKILLS: &[&str] = &["skills", "technologies", "stack"];

/// Welcome to the Jungle phrases its headers differently ("Profile",
/// "Mission"), so it gets its own header sets.
pub const WTTJ_REQUIREMENTS: &[&str] =
    &["requirements", "profile", "what we are looking for", "skills"];

pub const WTTJ_RESPONSIBILITIES: &[&str] =
    &["responsibilities", "what you will do", "the role", "mission"];

/// Body-text signatures of anti-automation challenge pages. Vendor names
/// are matched verbatim (they appear in script URLs and widget markup).
pub const BOT_WALL_MARKERS: &[&str] = &["hCaptcha", "Cloudflare", "dd-captcha", "Checking your browser"];

/// Page titles served instead of content when a request is refused.
pub const BLOCKED_PAGE_TITLES: &[&str] = &["Access Denied"];
