//! HTTP fetching
//!
//! One shared client, one GET per event page. HTTP-level error statuses are
//! not treated specially: a 404 body is queued and extracted like any other
//! page (it simply contains no qualifying tables). Transport-level failures
//! are fatal to the whole run; the prescribed mitigation for an overloaded
//! server is a lower request rate, not automatic retry.

use crate::{Result, ScoutError};
use reqwest::Client;

/// The result of one completed event-page fetch
///
/// Owned by exactly one pipeline stage at a time: the fetch task creates it,
/// the response queue carries it, the extractor consumes it.
#[derive(Debug)]
pub struct FetchedResponse {
    /// The address the fetch was dispatched for
    pub url: String,

    /// HTTP status code
    pub status: u16,

    /// Response body text
    pub body: String,
}

/// Builds the HTTP client shared by all fetch tasks
///
/// No overall request timeout is set: a hung connection stalls the pipeline
/// rather than aborting it, and the transport's own defaults apply.
pub fn build_http_client() -> Result<Client> {
    let user_agent = format!(
        "{}/{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let client = Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Fetches one event page
///
/// Every transport error maps to the fatal [`ScoutError::Fetch`]; there is no
/// retry anywhere in the pipeline.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedResponse> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScoutError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status().as_u16();

    let body = response
        .text()
        .await
        .map_err(|source| ScoutError::Fetch {
            url: url.to_string(),
            source,
        })?;

    Ok(FetchedResponse {
        url: url.to_string(),
        status,
        body,
    })
}
