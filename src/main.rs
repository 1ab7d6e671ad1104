use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use job_scraper::{ingest, JobInput, ScraperConfig};

/// Scrape a job posting and print it as JSON.
#[derive(Parser)]
#[command(name = "cvmatch-scrape", version)]
struct Args {
    /// Job posting URL (LinkedIn, Indeed, Glassdoor, Welcome to the
    /// Jungle, or any other job board).
    #[arg(required_unless_present = "text")]
    url: Option<String>,

    /// Read a pasted job description from stdin instead of scraping.
    #[arg(long, conflicts_with = "url")]
    text: bool,

    /// Page-load timeout in seconds.
    #[arg(long, default_value_t = 60)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config =
        ScraperConfig::new().with_page_timeout(std::time::Duration::from_secs(args.timeout));

    let input = if args.text {
        let mut buffer = String::new();
        use std::io::Read;
        std::io::stdin().read_to_string(&mut buffer)?;
        JobInput::Text(buffer)
    } else {
        JobInput::Url(args.url.expect("clap enforces url unless --text"))
    };

    match ingest(&config, input).await {
        Ok(posting) => {
            println!("{}", serde_json::to_string_pretty(&posting)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}
