//! Discount-Scout: a rate-limited event-page scraper
//!
//! This crate continuously fetches event pages discovered from a news index,
//! paced at a fixed request rate, and opportunistically extracts discount
//! tables from each page. Fetching and extraction are decoupled through a
//! bounded response queue so the producer can only run a few pages ahead of
//! the consumer.

pub mod config;
pub mod extract;
pub mod index;
pub mod pipeline;

use thiserror::Error;

/// Main error type for Discount-Scout operations
///
/// Every variant here corresponds to a fatal condition that aborts the whole
/// run; per-page extraction failures have their own non-fatal
/// [`ExtractError`] and never surface through this type.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch failed for {url}: {source} (try a lower request rate)")]
    Fetch { url: String, source: reqwest::Error },

    #[error("Failed to fetch news page {page_index}: {source}")]
    IndexPage {
        page_index: u64,
        source: reqwest::Error,
    },

    #[error(
        "News page {page_index} returned {got} event links, expected {expected}; \
         events-per-news-page no longer matches the site layout"
    )]
    BatchMisaligned {
        page_index: u64,
        expected: usize,
        got: usize,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors local to a single extraction pass
///
/// These are logged and skipped by the consume loop; a page that fails to
/// extract simply yields zero records.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for Discount-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::ExtractedRecord;
pub use pipeline::{run_scrape, FetchedResponse, RunSummary};
