//! Run orchestration
//!
//! The coordinator owns the page budget. It validates configuration, starts
//! the producer in the background, then drains the response queue and feeds
//! every completed page through table extraction until the budget is
//! exhausted or a fatal error arrives.

use crate::config::{self, Config};
use crate::extract;
use crate::pipeline::fetcher::{build_http_client, FetchedResponse};
use crate::pipeline::producer::run_producer;
use crate::pipeline::RESPONSE_QUEUE_DEPTH;
use crate::{ConfigError, Result};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use url::Url;

/// Final accounting for one scrape run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Event pages drained from the queue and passed through extraction
    pub pages_processed: u64,

    /// Qualifying discount tables rendered along the way
    pub tables_found: u64,
}

/// Runs one complete scrape
///
/// The run moves through four phases:
///
/// 1. Startup: validate the configuration and build the HTTP client, before
///    any network activity.
/// 2. Running: pop completed responses, extract and render discount tables,
///    count pages. Extraction failures are logged and skipped; a fatal
///    producer error aborts the run immediately.
/// 3. Draining: once the budget is met (or the index runs dry), stop the
///    producer and let it settle.
/// 4. Done: report the final counts.
///
/// `processed` never exceeds the number of dispatched requests: the producer
/// alone advances its dispatch counter and this loop alone advances
/// `processed`, with the bounded queue between them.
pub async fn run_scrape(config: Config) -> Result<RunSummary> {
    config::validate(&config)?;

    let base = Url::parse(&config.site.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    let client = build_http_client()?;
    let config = Arc::new(config);
    let total = config.scrape.total_pages;

    let (queue_tx, mut queue_rx) =
        mpsc::channel::<Result<FetchedResponse>>(RESPONSE_QUEUE_DEPTH);

    let producer = tokio::spawn(run_producer(
        client,
        Arc::clone(&config),
        base,
        queue_tx,
    ));

    let mut processed: u64 = 0;
    let mut tables_found: u64 = 0;
    let start_time = Instant::now();

    while processed < total {
        match queue_rx.recv().await {
            Some(Ok(response)) => {
                match extract::extract_records(&response) {
                    Ok(records) => {
                        tables_found += records.len() as u64;
                        for record in &records {
                            print!("{}", extract::format_record(record));
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Skipping {}: {}", response.url, e);
                    }
                }
                processed += 1;

                if processed % 10 == 0 {
                    let rate = processed as f64 / start_time.elapsed().as_secs_f64();
                    tracing::info!(
                        "Progress: {}/{} pages, {} tables, {:.2} pages/sec",
                        processed,
                        total,
                        tables_found,
                        rate
                    );
                }
            }
            Some(Err(e)) => {
                producer.abort();
                tracing::error!("Fatal error after {} pages: {}", processed, e);
                return Err(e);
            }
            None => {
                // Producer and all in-flight tasks are gone: the news index
                // ran out of content before the budget was met.
                tracing::warn!(
                    "Event stream ended after {} of {} pages",
                    processed,
                    total
                );
                break;
            }
        }
    }

    drop(queue_rx);
    producer.await?;

    tracing::info!(
        "Scrape complete: {} pages, {} tables in {:?}",
        processed,
        tables_found,
        start_time.elapsed()
    );

    Ok(RunSummary {
        pages_processed: processed,
        tables_found,
    })
}
