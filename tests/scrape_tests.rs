//! Integration tests for the scrape pipeline
//!
//! These tests use wiremock to stand in for the news index and event pages
//! and drive the full producer/consumer cycle end-to-end.

use discount_scout::config::Config;
use discount_scout::{run_scrape, ScoutError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a config pointed at the mock server
fn test_config(base_url: &str, total_pages: u64, events_per_news_page: u64) -> Config {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.site.events_per_news_page = events_per_news_page;
    config.scrape.total_pages = total_pages;
    config.scrape.request_rate = 100.0; // Fast pacing for tests
    config
}

/// Renders a news-index page advertising the given event URLs
fn index_page(event_urls: &[String]) -> String {
    let mut body = String::from("<html><body>");
    for (i, url) in event_urls.iter().enumerate() {
        body.push_str(&format!(
            r#"<a class="preview_link" href="{}"><h2 class="preview_title">Event {}</h2></a>"#,
            url, i
        ));
    }
    body.push_str("</body></html>");
    body
}

async fn mount_index(server: &MockServer, index_path: &str, event_urls: &[String]) {
    Mock::given(method("GET"))
        .and(path(index_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(index_page(event_urls)))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_event(server: &MockServer, event_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(event_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

const DISCOUNT_PAGE: &str = r#"<html><body>
    <p>10:00</p>
    <table><tbody>
      <tr><td>Tank</td><td>discount</td></tr>
      <tr><td>T-34</td><td>-50%</td></tr>
    </tbody></table>
    </body></html>"#;

const PLAIN_PAGE: &str = "<html><body><p>Nothing on sale today.</p></body></html>";

#[tokio::test]
async fn test_end_to_end_scrape() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_index(
        &server,
        "/en/news/",
        &[format!("{}/event-a", base), format!("{}/event-b", base)],
    )
    .await;
    mount_event(&server, "/event-a", DISCOUNT_PAGE).await;
    mount_event(&server, "/event-b", PLAIN_PAGE).await;

    let summary = run_scrape(test_config(&base, 2, 2)).await.unwrap();

    assert_eq!(summary.pages_processed, 2);
    assert_eq!(summary.tables_found, 1);
}

#[tokio::test]
async fn test_batches_are_pulled_exactly_at_boundaries() {
    let server = MockServer::start().await;
    let base = server.uri();

    // Budget 6 at 2 events per news page: index pulls for pages 0, 1, 2 at
    // dispatch counts 0, 2, 4 and never otherwise. The expect(1) on each
    // index mock is verified when the server shuts down.
    for (index_path, offset) in [("/en/news/", 0), ("/en/news/p2/", 2), ("/en/news/p3/", 4)] {
        mount_index(
            &server,
            index_path,
            &[
                format!("{}/event-{}", base, offset),
                format!("{}/event-{}", base, offset + 1),
            ],
        )
        .await;
    }
    for i in 0..6 {
        mount_event(&server, &format!("/event-{}", i), PLAIN_PAGE).await;
    }

    let summary = run_scrape(test_config(&base, 6, 2)).await.unwrap();

    assert_eq!(summary.pages_processed, 6);
    assert_eq!(summary.tables_found, 0);
}

#[tokio::test]
async fn test_connection_refused_is_fatal() {
    let server = MockServer::start().await;
    let base = server.uri();

    // A port with no listener behind it.
    let dead_port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    mount_index(
        &server,
        "/en/news/",
        &[
            format!("http://127.0.0.1:{}/event-a", dead_port),
            format!("http://127.0.0.1:{}/event-b", dead_port),
        ],
    )
    .await;

    let result = run_scrape(test_config(&base, 2, 2)).await;

    assert!(matches!(result, Err(ScoutError::Fetch { .. })));
}

#[tokio::test]
async fn test_empty_index_page_stops_run_early() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_index(
        &server,
        "/en/news/",
        &[format!("{}/event-a", base), format!("{}/event-b", base)],
    )
    .await;
    mount_index(&server, "/en/news/p2/", &[]).await;
    mount_event(&server, "/event-a", PLAIN_PAGE).await;
    mount_event(&server, "/event-b", PLAIN_PAGE).await;

    // Budget asks for 10 pages but the index runs dry after 2.
    let summary = run_scrape(test_config(&base, 10, 2)).await.unwrap();

    assert_eq!(summary.pages_processed, 2);
}

#[tokio::test]
async fn test_short_batch_is_a_misalignment_error() {
    let server = MockServer::start().await;
    let base = server.uri();

    // Config says 3 events per news page, the index only lists 2.
    mount_index(
        &server,
        "/en/news/",
        &[format!("{}/event-a", base), format!("{}/event-b", base)],
    )
    .await;
    mount_event(&server, "/event-a", PLAIN_PAGE).await;
    mount_event(&server, "/event-b", PLAIN_PAGE).await;

    let result = run_scrape(test_config(&base, 6, 3)).await;

    assert!(matches!(result, Err(ScoutError::BatchMisaligned { .. })));
}

#[tokio::test]
async fn test_error_status_pages_still_count() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_index(&server, "/en/news/", &[format!("{}/event-a", base)]).await;

    // HTTP-level errors are not fatal: the error page body is queued and
    // extracted like any other, yielding no tables.
    Mock::given(method("GET"))
        .and(path("/event-a"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;

    let summary = run_scrape(test_config(&base, 1, 1)).await.unwrap();

    assert_eq!(summary.pages_processed, 1);
    assert_eq!(summary.tables_found, 0);
}

#[tokio::test]
async fn test_invalid_config_fails_before_any_fetch() {
    let server = MockServer::start().await;
    let base = server.uri();

    // No mocks mounted: any request would 404 and wiremock would record it.
    let mut config = test_config(&base, 2, 2);
    config.scrape.request_rate = 0.0;

    let result = run_scrape(config).await;

    assert!(matches!(result, Err(ScoutError::Config(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}
