//! Shared test utilities for command testing.
//!
//! Provides the harness, wiremock helpers, and JSON fixtures for testing
//! command implementations in isolation.

use quill_core::config::MemoryConfig;
use quill_core::iostreams::TestOutput;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::factory::Factory;

/// Token the harness authenticates with.
pub const TEST_TOKEN: &str = "ghp_test_token_123";

/// A fully-configured test harness with factory, output capture, and mock server.
#[derive(Debug)]
pub struct TestHarness {
    /// The factory configured for testing.
    pub factory: Factory,
    /// Captured stdout/stderr output.
    pub output: TestOutput,
    /// Wiremock mock server for API requests.
    pub server: MockServer,
}

impl TestHarness {
    /// Create a test harness whose default repository is `sect/quotes`.
    pub async fn new() -> Self {
        Self::with_config(MemoryConfig::new().with("repo", "sect/quotes")).await
    }

    /// Create a test harness with a custom `MemoryConfig`.
    pub async fn with_config(config: MemoryConfig) -> Self {
        Self::build(config, "").await
    }

    /// Create a test harness whose stdin yields `input`.
    pub async fn with_stdin(input: &str) -> Self {
        Self::build(MemoryConfig::new().with("repo", "sect/quotes"), input).await
    }

    async fn build(config: MemoryConfig, input: &str) -> Self {
        let server = MockServer::start().await;
        let (factory, output) = Factory::test_with_input(input);
        let factory = factory
            .with_http_client(reqwest::Client::new())
            .with_api_url(format!("{}/", server.uri()))
            .with_token(TEST_TOKEN)
            .with_config(Box::new(config));

        Self {
            factory,
            output,
            server,
        }
    }

    /// Get captured stdout as a string.
    pub fn stdout(&self) -> String {
        self.output.stdout()
    }

    /// Get captured stderr as a string.
    pub fn stderr(&self) -> String {
        self.output.stderr()
    }
}

// --- Wiremock helpers ---

/// Mount the quote listing endpoint for `sect/quotes`.
pub async fn mock_quote_list(server: &MockServer, issues: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/repos/sect/quotes/issues"))
        .and(query_param("labels", "quote"))
        .and(query_param("state", "open"))
        .and(header("Authorization", format!("token {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(issues))
        .mount(server)
        .await;
}

/// Mount a REST GET response mock for a specific path.
pub async fn mock_rest_get(
    server: &MockServer,
    url_path: &str,
    status: u16,
    response_body: serde_json::Value,
) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .and(header("Authorization", format!("token {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(status).set_body_json(response_body))
        .mount(server)
        .await;
}

/// Mount a REST POST response mock for a specific path.
pub async fn mock_rest_post(
    server: &MockServer,
    url_path: &str,
    status: u16,
    response_body: serde_json::Value,
) {
    Mock::given(method("POST"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(response_body))
        .mount(server)
        .await;
}

/// Mount a REST PATCH response mock for a specific path.
pub async fn mock_rest_patch(
    server: &MockServer,
    url_path: &str,
    status: u16,
    response_body: serde_json::Value,
) {
    Mock::given(method("PATCH"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status).set_body_json(response_body))
        .mount(server)
        .await;
}

/// JSON body of the last request the server received.
pub async fn last_request_body(server: &MockServer) -> serde_json::Value {
    let requests = server.received_requests().await.unwrap_or_default();
    let last = requests.last().expect("no request was received");
    serde_json::from_slice(&last.body).expect("request body is not JSON")
}

// --- Common REST response fixtures ---

/// Build a quote issue fixture.
pub fn quote_issue_fixture(number: u64, title: &str, body: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 1000 + number,
        "number": number,
        "title": title,
        "body": body,
        "user": { "login": "testuser" },
        "comments": 2,
        "created_at": "2024-01-15T10:00:00Z",
        "reactions": { "+1": 5, "-1": 1, "total_count": 6 },
        "labels": [{ "name": "quote" }],
        "state": "open",
        "html_url": format!("https://github.com/sect/quotes/issues/{number}")
    })
}

/// Build a record issue fixture as returned by create/update/close.
pub fn record_issue_fixture(number: u64, title: &str, state: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 2000 + number,
        "number": number,
        "title": title,
        "body": "entry",
        "user": { "login": "testuser" },
        "comments": 0,
        "created_at": "2024-01-15T10:00:00Z",
        "labels": [{ "name": "record" }],
        "state": state,
        "html_url": format!("https://github.com/sect/quotes/issues/{number}")
    })
}

/// Build a comment fixture.
pub fn comment_fixture(id: u64, login: &str, body: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user": { "login": login },
        "body": body,
        "created_at": "2024-01-16T08:30:00Z"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_should_create_test_harness() {
        let h = TestHarness::new().await;
        assert!(h.stdout().is_empty());
        assert!(h.stderr().is_empty());
    }

    #[tokio::test]
    async fn test_should_capture_output_through_factory() {
        let h = TestHarness::new().await;
        h.factory.io.println_out("hello from test");
        assert_eq!(h.stdout(), "hello from test\n");
    }

    #[tokio::test]
    async fn test_should_route_tracker_to_mock_server() {
        let h = TestHarness::new().await;
        mock_quote_list(
            &h.server,
            serde_json::json!([quote_issue_fixture(1, "Be still", "category: Zen")]),
        )
        .await;

        let tracker = h.factory.tracker(None).unwrap();
        let quotes = tracker.try_list_quotes().await.unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].school, "Zen");
    }
}
