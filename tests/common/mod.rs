//! Shared helpers for the integration tests
//!
//! Every test runs against a wiremock server standing in for the remote
//! logging endpoint.

use std::collections::HashMap;

use remote_logging_actix::{Config, ExceptionReporter};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-token";

/// Start a mock server and a reporter pointing at it
pub async fn setup(enabled: bool, dont_report: &[&str]) -> (MockServer, ExceptionReporter) {
    let server = MockServer::start().await;
    let config = Config::new(enabled, format!("{}/", server.uri()), TOKEN)
        .with_dont_report(dont_report.iter().copied())
        .with_environment("testing");

    (server, ExceptionReporter::new(config))
}

/// Mount an authenticated POST endpoint expecting exactly `calls` hits
pub async fn mount_endpoint(server: &MockServer, endpoint: &str, status: u16, calls: u64) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(header("accept", "application/json"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(status))
        .expect(calls)
        .mount(server)
        .await;
}

/// Decode the form body of every request the server has seen
pub async fn received_forms(server: &MockServer) -> Vec<HashMap<String, String>> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|req| {
            url::form_urlencoded::parse(&req.body)
                .into_owned()
                .collect::<HashMap<String, String>>()
        })
        .collect()
}
