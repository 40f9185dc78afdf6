//! Discount-Scout main entry point
//!
//! Command-line interface for the discount-table scraper.

use clap::Parser;
use discount_scout::config::{self, Config};
use discount_scout::run_scrape;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Discount-Scout: find out when credit discounts were active
///
/// Walks the news index page by page, fetches every advertised event page at
/// a fixed request rate, and prints any discount table it finds along with
/// the event's time span.
#[derive(Parser, Debug)]
#[command(name = "discount-scout")]
#[command(version)]
#[command(about = "Scrapes event pages for credit-discount tables", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the total number of event pages to scrape
    #[arg(long, value_name = "N")]
    pages: Option<u64>,

    /// Override the request rate in requests per second
    #[arg(long, value_name = "RATE")]
    rate: Option<f64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            config::load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(pages) = cli.pages {
        config.scrape.total_pages = pages;
    }
    if let Some(rate) = cli.rate {
        config.scrape.request_rate = rate;
    }

    // Overrides can invalidate a config that loaded cleanly.
    if let Err(e) = config::validate(&config) {
        tracing::error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    tracing::info!(
        "Scraping {} event pages from {} at {} req/s",
        config.scrape.total_pages,
        config.site.base_url,
        config.scrape.request_rate
    );

    match run_scrape(config).await {
        Ok(summary) => {
            println!(
                "Finished! {} event pages were scraped, {} discount tables found.",
                summary.pages_processed, summary.tables_found
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("discount_scout=info,warn"),
            1 => EnvFilter::new("discount_scout=debug,info"),
            2 => EnvFilter::new("discount_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
