//! News-index discovery
//!
//! This module maps a zero-based news-page index to the ordered list of event
//! page URLs advertised on it. The news index renders a grid of preview
//! cards; each card is an `a.preview_link` anchor wrapping an
//! `h2.preview_title` heading, and the anchor href points at the event page.

use crate::{Result, ScoutError};
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// Builds the URL of one news-index page
///
/// Index 0 is the bare news path; later pages are addressed as `p2/`, `p3/`
/// and so on below it.
pub fn page_url(base: &Url, news_path: &str, page_index: u64) -> Result<Url> {
    let path = if page_index == 0 {
        news_path.to_string()
    } else {
        format!("{}p{}/", news_path, page_index + 1)
    };

    base.join(&path).map_err(|e| {
        ScoutError::Config(crate::ConfigError::InvalidUrl(format!(
            "Cannot build news page URL from '{}' + '{}': {}",
            base, path, e
        )))
    })
}

/// Scans one news-index page for event links
///
/// Anchors are returned in document order as absolute URLs; anchors without a
/// preview title or without a resolvable href are skipped. An empty result is
/// valid and means the index has run out of content.
pub fn parse_event_links(html: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(link_selector) = Selector::parse("a.preview_link") else {
        return Vec::new();
    };
    let Ok(title_selector) = Selector::parse("h2.preview_title") else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for anchor in document.select(&link_selector) {
        // Preview cards always carry a title; anchors without one are
        // navigation chrome, not events.
        if anchor.select(&title_selector).next().is_none() {
            continue;
        }

        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        if let Ok(absolute) = base.join(href) {
            links.push(absolute.to_string());
        }
    }

    links
}

/// Fetches one news-index page and returns the event URLs found on it
///
/// Transport errors propagate: the index feed is the producer's only source
/// of addresses, so losing it is fatal to the run.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `base` - Root URL of the site
/// * `news_path` - Path of the news index below the base URL
/// * `page_index` - Zero-based news-page index
pub async fn fetch_event_urls(
    client: &Client,
    base: &Url,
    news_path: &str,
    page_index: u64,
) -> Result<Vec<String>> {
    let url = page_url(base, news_path, page_index)?;
    tracing::debug!("Fetching news page {} from {}", page_index, url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScoutError::IndexPage { page_index, source })?;

    let body = response
        .text()
        .await
        .map_err(|source| ScoutError::IndexPage { page_index, source })?;

    Ok(parse_event_links(&body, base))
}
