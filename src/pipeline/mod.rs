//! The fetch/extract pipeline
//!
//! This module contains the core pipeline stages:
//! - Request pacing against a fixed rate budget
//! - HTTP fetching with one task per in-flight page
//! - The bounded response queue decoupling fetch completion from extraction
//! - Overall run coordination and the final summary

mod coordinator;
mod fetcher;
mod limiter;
mod producer;

pub use coordinator::{run_scrape, RunSummary};
pub use fetcher::{build_http_client, fetch_page, FetchedResponse};
pub use limiter::RateLimiter;
pub use producer::run_producer;

/// Capacity of the response queue
///
/// The buffer smooths completion jitter between concurrent fetch tasks; it is
/// deliberately small so the producer can never run far ahead of extraction.
pub const RESPONSE_QUEUE_DEPTH: usize = 8;
