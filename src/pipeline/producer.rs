//! Fetch dispatch loop
//!
//! The producer walks the news index batch by batch and dispatches one fetch
//! task per event page, paced by the rate limiter. Dispatch order is
//! deterministic; completion order is not, because every dispatch runs as an
//! independent task that pushes its own result onto the response queue.

use crate::config::Config;
use crate::index;
use crate::pipeline::fetcher::{fetch_page, FetchedResponse};
use crate::pipeline::limiter::RateLimiter;
use crate::{Result, ScoutError};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::mpsc;
use url::Url;

/// Drives up to `total-pages` fetch dispatches
///
/// At every `events-per-news-page` boundary a fresh batch of addresses is
/// pulled from the news index; between boundaries the loop dispatches one
/// fetch per rate-limiter permit. Fatal conditions (index feed lost, batch
/// misalignment, transport failure inside a fetch task) are pushed onto the
/// queue as errors so the consumer can abort the run.
///
/// The permit is acquired after each dispatch, so the first dispatch goes out
/// immediately.
pub async fn run_producer(
    client: Client,
    config: Arc<Config>,
    base: Url,
    queue: mpsc::Sender<Result<FetchedResponse>>,
) {
    let mut limiter = RateLimiter::new(config.scrape.request_rate);
    let per_page = config.site.events_per_news_page;
    let total = config.scrape.total_pages;

    let mut event_urls: Vec<String> = Vec::new();
    let mut requested: u64 = 0;

    while requested < total {
        if requested % per_page == 0 {
            let page_index = requested / per_page;
            tracing::info!(
                "Requesting event pages {} to {} (news page {})",
                requested,
                (requested + per_page).min(total),
                page_index
            );

            event_urls = match index::fetch_event_urls(
                &client,
                &base,
                &config.site.news_path,
                page_index,
            )
            .await
            {
                Ok(urls) => urls,
                Err(e) => {
                    let _ = queue.send(Err(e)).await;
                    return;
                }
            };

            if event_urls.is_empty() {
                tracing::warn!(
                    "News page {} lists no events; stopping after {} of {} requests",
                    page_index,
                    requested,
                    total
                );
                return;
            }
        }

        let slot = (requested % per_page) as usize;
        let url = match event_urls.get(slot) {
            Some(url) => url.clone(),
            None => {
                // A short batch means the configured page size no longer
                // matches the site layout; indexing past the end must never
                // be papered over.
                let err = ScoutError::BatchMisaligned {
                    page_index: requested / per_page,
                    expected: per_page as usize,
                    got: event_urls.len(),
                };
                let _ = queue.send(Err(err)).await;
                return;
            }
        };

        tokio::spawn({
            let client = client.clone();
            let queue = queue.clone();
            async move {
                let outcome = fetch_page(&client, &url).await;
                // Suspends while the queue is full: the sole backpressure
                // point between fetching and extraction.
                let _ = queue.send(outcome).await;
            }
        });
        requested += 1;

        limiter.acquire().await;
    }

    tracing::debug!("Producer finished after {} dispatches", requested);
}
