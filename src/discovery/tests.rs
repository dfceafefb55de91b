//! Tests for schema discovery

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok(response: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "messages": [{"code": "0", "message": "OK"}],
        "response": response
    }))
}

fn names(layouts: &[Layout]) -> Vec<&str> {
    layouts.iter().map(|l| l.name.as_str()).collect()
}

// ============================================================================
// list_databases
// ============================================================================

#[tokio::test]
async fn test_list_databases() {
    let mock_server = MockServer::start().await;

    // "reader:pw" in base64
    Mock::given(method("GET"))
        .and(path("/fmi/data/v2/databases"))
        .and(header("Authorization", "Basic cmVhZGVyOnB3"))
        .respond_with(ok(json!({
            "databases": [{"name": "Sales"}, {"name": "HR"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = mock_server.uri().replace("http://", "http://reader:pw@");
    let client = FmClient::from_url(&url).unwrap();
    let databases = client.list_databases().await.unwrap();

    assert_eq!(
        databases,
        vec![
            Database { name: "Sales".to_string() },
            Database { name: "HR".to_string() }
        ]
    );
}

#[tokio::test]
async fn test_list_databases_empty_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fmi/data/v2/databases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [],
            "response": {"databases": [{"name": "Sales"}]}
        })))
        .mount(&mock_server)
        .await;

    let client = FmClient::from_url(&mock_server.uri()).unwrap();
    let result = client.list_databases().await;

    assert!(matches!(
        result,
        Err(Error::Protocol { ref message }) if message == "unknown errors"
    ));
}

#[tokio::test]
async fn test_list_databases_server_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fmi/data/v2/databases"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "messages": [{"code": "212", "message": "Invalid credentials"}],
            "response": {}
        })))
        .mount(&mock_server)
        .await;

    let client = FmClient::from_url(&mock_server.uri()).unwrap();
    let result = client.list_databases().await;

    assert!(matches!(
        result,
        Err(Error::Application { ref message }) if message == "Invalid credentials"
    ));
}

// ============================================================================
// list_layouts
// ============================================================================

#[tokio::test]
async fn test_list_layouts_uses_session_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fmi/data/v2/databases/Sales/layouts"))
        .and(header("Authorization", "Bearer tok-sales"))
        .respond_with(ok(json!({
            "layouts": [
                {"name": "Contacts", "isFolder": false},
                {"name": "Reports", "isFolder": true, "folderLayoutNames": [{"name": "Monthly"}]}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FmClient::from_url(&mock_server.uri()).unwrap();
    let session = Session::new("Sales", "tok-sales");
    let layouts = client.list_layouts(&session).await.unwrap();

    assert_eq!(
        layouts,
        vec![
            Layout::new("Contacts"),
            Layout::folder("Reports", vec![Layout::new("Monthly")])
        ]
    );
}

#[tokio::test]
async fn test_list_layouts_encodes_database_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fmi/data/v2/databases/Sales%202024/layouts"))
        .respond_with(ok(json!({"layouts": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FmClient::from_url(&mock_server.uri()).unwrap();
    let session = Session::new("Sales 2024", "tok");
    let layouts = client.list_layouts(&session).await.unwrap();

    assert!(layouts.is_empty());
}

#[tokio::test]
async fn test_list_layouts_invalid_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fmi/data/v2/databases/HR/layouts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "messages": [{"code": "952", "message": "Invalid FileMaker Data API token (*)"}],
            "response": {}
        })))
        .mount(&mock_server)
        .await;

    let client = FmClient::from_url(&mock_server.uri()).unwrap();
    // A token issued for another database
    let session = Session::new("HR", "tok-sales");
    let result = client.list_layouts(&session).await;

    assert!(matches!(
        result,
        Err(Error::Application { ref message }) if message.starts_with("Invalid FileMaker Data API token")
    ));
}

// ============================================================================
// dumpable_layouts
// ============================================================================

#[test]
fn test_dumpable_layouts_flattens_folders() {
    let tree = vec![
        Layout::new("Contacts"),
        Layout::folder(
            "Reports",
            vec![
                Layout::new("Monthly"),
                Layout::folder("Archive", vec![Layout::new("2019")]),
                Layout::new("Yearly"),
            ],
        ),
        Layout::new("Invoices"),
    ];

    let flat = dumpable_layouts(&tree);
    assert_eq!(
        names(&flat),
        vec!["Contacts", "Monthly", "2019", "Yearly", "Invoices"]
    );
    assert!(flat.iter().all(|l| !l.is_folder));
}

#[test]
fn test_dumpable_layouts_empty_folder() {
    let tree = vec![Layout::folder("Empty", vec![])];
    assert!(dumpable_layouts(&tree).is_empty());
}
