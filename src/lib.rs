//! CV-to-job matching backend: job-posting ingestion pipeline.
//!
//! The entry point is [`scraping::scrape_job`], which takes a user-supplied
//! URL, routes it to a platform-specific extractor (LinkedIn, Indeed,
//! Glassdoor, Welcome to the Jungle) or the validated generic fallback,
//! and returns a normalized [`scraping::JobPosting`] ready for analysis.
//! [`intake`] wraps it with the manual paste path.

pub mod config;
pub mod intake;
pub mod scraping;

pub use config::ScraperConfig;
pub use intake::{ingest, JobInput};
pub use scraping::{scrape_job, JobPosting, Platform, ScrapeError};
