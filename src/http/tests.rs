//! Tests for the HTTP client module

use super::*;
use crate::auth::{AuthConfig, Credentials, Session};
use crate::error::Error;
use reqwest::Method;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(20));
    assert_eq!(config.connect_timeout, Duration::from_secs(20));
    assert!(config.accept_invalid_certs);
    assert!(config.base_url.is_none());
    assert_eq!(
        config.default_headers.get("content-type"),
        Some(&"application/json".to_string())
    );
    assert!(config.user_agent.starts_with("fmdump/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://fm.example.com")
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(5))
        .accept_invalid_certs(false)
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://fm.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert!(!config.accept_invalid_certs);
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("_offset", "1")
        .query("_limit", "100")
        .json(serde_json::json!({}))
        .auth(AuthConfig::Bearer {
            token: "t".to_string(),
        });

    assert_eq!(
        config.query,
        vec![
            ("_offset".to_string(), "1".to_string()),
            ("_limit".to_string(), "100".to_string())
        ]
    );
    assert!(config.body.is_some());
    assert!(matches!(config.auth, AuthConfig::Bearer { .. }));
}

#[test]
fn test_invalid_base_url_rejected() {
    let config = HttpClientConfig::builder().base_url("not a url").build();
    let result = HttpClient::with_config(config);
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

// ============================================================================
// URL Building Tests
// ============================================================================

#[test]
fn test_endpoint_appends_segments() {
    let config = HttpClientConfig::builder()
        .base_url("https://fm.example.com:8443")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let url = client
        .endpoint(["fmi", "data", "v2", "databases"])
        .unwrap();
    assert_eq!(url.as_str(), "https://fm.example.com:8443/fmi/data/v2/databases");
}

#[test]
fn test_endpoint_encodes_segments() {
    let config = HttpClientConfig::builder()
        .base_url("https://fm.example.com")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let url = client
        .endpoint(["databases", "Sales 2024", "layouts", "A/B?"])
        .unwrap();
    assert_eq!(
        url.path(),
        "/databases/Sales%202024/layouts/A%2FB%3F"
    );
}

#[test]
fn test_endpoint_without_base_url() {
    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let result = client.endpoint(["databases"]);
    assert!(matches!(result, Err(Error::Config { .. })));
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_request_sends_content_type_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/records"))
        .and(header("Content-Type", "application/json"))
        .and(query_param("_offset", "101"))
        .and(query_param("_limit", "100"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client.endpoint(["api", "records"]).unwrap();
    let response = client
        .request(
            Method::GET,
            url,
            RequestConfig::new().query("_offset", "101").query("_limit", "100"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_request_basic_auth_and_body() {
    let mock_server = MockServer::start().await;

    // "admin:pw" in base64
    Mock::given(method("POST"))
        .and(path("/api/sessions"))
        .and(header("Authorization", "Basic YWRtaW46cHc="))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client.endpoint(["api", "sessions"]).unwrap();
    let auth = AuthConfig::basic(&Credentials::new("admin", "pw"));
    let response = client
        .request(
            Method::POST,
            url,
            RequestConfig::new().json(serde_json::json!({})).auth(auth),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_request_bearer_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/layouts"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client.endpoint(["api", "layouts"]).unwrap();
    let session = Session::new("Sales", "tok-1");
    let response = client
        .request(
            Method::GET,
            url,
            RequestConfig::new().auth(AuthConfig::bearer(&session)),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_request_does_not_fail_on_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client.endpoint(["api", "missing"]).unwrap();
    let response = client
        .request(Method::GET, url, RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_request_envelope_on_401() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/sessions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "messages": [{"code": "212", "message": "Invalid user account and/or password; please try again"}],
            "response": {}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client.endpoint(["api", "sessions"]).unwrap();
    let envelope = client
        .request_envelope(Method::POST, url, RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(envelope.messages.len(), 1);
    assert_eq!(envelope.messages[0].code, "212");
}

#[tokio::test]
async fn test_request_envelope_non_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/broken"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client.endpoint(["api", "broken"]).unwrap();
    let result = client
        .request_envelope(Method::GET, url, RequestConfig::new())
        .await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 503, .. })));
}

#[tokio::test]
async fn test_request_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let url = client.endpoint(["api", "slow"]).unwrap();
    let result = client.request(Method::GET, url, RequestConfig::new()).await;

    let err = result.unwrap_err();
    assert!(err.is_infrastructure());
}
