//! Integration tests for the blocking client against a mock HTTP server.
//!
//! The mock server is async, so each test holds a small Tokio runtime for
//! it while the client calls run synchronously on the test thread. The
//! covered contract mirrors the async suite; both flavors must behave
//! identically.

use newsrank::blocking::Client;
use newsrank::{Error, ErrorBody};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches requests that carry no `Authorization` header.
struct NoAuthorizationHeader;

impl Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

/// Starts a mock server on a background runtime that outlives the test body.
fn start_server() -> (Runtime, MockServer) {
    let runtime = Runtime::new().expect("tokio runtime for mock server");
    let server = runtime.block_on(MockServer::start());
    (runtime, server)
}

fn client_for(server: &MockServer) -> Client {
    Client::builder("nrf_test_key")
        .base_url(server.uri())
        .build()
        .expect("client should build against mock server")
}

#[test]
fn test_ranked_stories_round_trip() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/stories/ranked"))
            .and(query_param("limit", "5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"items": [{"id": 1, "title": "A"}]})),
            )
            .mount(&server),
    );

    let nr = client_for(&server);
    let body = nr.stories().ranked(Some(5)).expect("request succeeds");

    assert_eq!(body, Some(json!({"items": [{"id": 1, "title": "A"}]})));
}

#[test]
fn test_absent_params_never_sent() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/item"))
            .and(query_param_is_missing("url_hash"))
            .and(query_param_is_missing("slug"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
            .mount(&server),
    );

    let nr = client_for(&server);
    let body = nr
        .articles()
        .get(None, None)
        .expect("request succeeds without either lookup param");

    assert_eq!(body, Some(json!({"id": 7})));
}

#[test]
fn test_429_with_json_error_body() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(
                ResponseTemplate::new(429).set_body_json(json!({"error": "rate limited"})),
            )
            .mount(&server),
    );

    let nr = client_for(&server);
    let error = nr
        .articles()
        .list(&newsrank::ArticleFilter::default())
        .expect_err("429 must classify as an error");

    match error {
        Error::RateLimit(failure) => {
            assert_eq!(failure.message, "rate limited");
            assert_eq!(failure.status, 429);
            assert_eq!(
                failure.body,
                Some(ErrorBody::Json(json!({"error": "rate limited"})))
            );
        }
        other => panic!("Expected RateLimit, got: {other:?}"),
    }
}

#[test]
fn test_404_with_plain_text_body() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/stories/999"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server),
    );

    let nr = client_for(&server);
    let error = nr.stories().get(999).expect_err("404 must classify");

    match error {
        Error::NotFound(failure) => {
            assert_eq!(failure.message, "API request failed with status 404");
            assert_eq!(failure.body, Some(ErrorBody::Text("not found".to_string())));
        }
        other => panic!("Expected NotFound, got: {other:?}"),
    }
}

#[test]
fn test_authenticated_calls_send_bearer_header() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/stats"))
            .and(header("authorization", "Bearer nrf_test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"articles": 100})))
            .mount(&server),
    );

    let nr = client_for(&server);
    let body = nr.meta().stats().expect("bearer header must match");

    assert_eq!(body, Some(json!({"articles": 100})));
}

#[test]
fn test_version_sends_no_authorization_header() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/version"))
            .and(NoAuthorizationHeader)
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "1.0.0"})))
            .mount(&server),
    );

    let nr = client_for(&server);
    let body = nr
        .meta()
        .version()
        .expect("version must be reachable without auth");

    assert_eq!(body, Some(json!({"version": "1.0.0"})));
}

#[test]
fn test_204_yields_no_content() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server),
    );

    let nr = client_for(&server);
    let body = nr.meta().stats().expect("204 is a success");

    assert_eq!(body, None);
}

#[test]
fn test_connection_fault_surfaces_as_transport_error() {
    let nr = Client::builder("nrf_test_key")
        .base_url("http://127.0.0.1:9")
        .build()
        .expect("client builds");

    let error = nr.meta().stats().expect_err("connection must be refused");

    assert!(matches!(error, Error::Transport(_)), "got: {error:?}");
    assert_eq!(error.status_code(), None);
}

#[test]
fn test_caller_supplied_pool_survives_close() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/stories/ranked"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server),
    );

    let external = reqwest::blocking::Client::new();
    let nr = Client::builder("nrf_test_key")
        .base_url(server.uri())
        .http_client(external.clone())
        .build()
        .expect("client builds with external pool");
    assert!(!nr.transport().owns_pool());

    nr.stories()
        .ranked(None)
        .expect("request through external pool succeeds");
    nr.close();

    // The caller's pool must remain fully usable after the client is gone.
    let response = external
        .get(format!("{}/stories/ranked", server.uri()))
        .send()
        .expect("external pool still usable after close");
    assert!(response.status().is_success());
}
