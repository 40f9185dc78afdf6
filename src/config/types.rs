use serde::Deserialize;

/// Main configuration structure for Discount-Scout
///
/// Every field carries a default matching the public site's layout, so a run
/// with no config file at all is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub scrape: ScrapeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            scrape: ScrapeConfig::default(),
        }
    }
}

/// Target-site layout configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root URL of the site hosting the news index
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the news index below the base URL
    #[serde(rename = "news-path")]
    pub news_path: String,

    /// Number of event links displayed per news page
    ///
    /// Must match the site's actual layout or address batches will be pulled
    /// at the wrong boundaries.
    #[serde(rename = "events-per-news-page")]
    pub events_per_news_page: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://worldoftanks.eu".to_string(),
            news_path: "/en/news/".to_string(),
            events_per_news_page: 72,
        }
    }
}

/// Scrape run configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Total number of event pages to fetch before stopping
    #[serde(rename = "total-pages")]
    pub total_pages: u64,

    /// Outbound request rate in requests per second
    ///
    /// The prescribed mitigation for an overloaded server is lowering this
    /// value; the pipeline never backs off on its own.
    #[serde(rename = "request-rate")]
    pub request_rate: f64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            total_pages: 1500,
            request_rate: 10.0,
        }
    }
}
