//! Datasource endpoint tests.
//!
//! # Invariants
//! - Datasource names are percent-encoded into the path
//! - An empty name is rejected before any request is sent

mod common;

use common::*;
use grafana_client::ClientError;
use grafana_client::models::DatasourceAccess;
use wiremock::matchers::{header, method, path};

#[tokio::test]
async fn test_list_datasources() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("datasources/list_datasources.json");

    Mock::given(method("GET"))
        .and(path("/api/datasources"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result =
        endpoints::list_datasources(&client, &mock_server.uri(), Some(TEST_TOKEN), 3).await;

    let datasources = result.unwrap();
    assert_eq!(datasources.len(), 2);
    assert_eq!(datasources[0].name, "prometheus");
    assert!(datasources[0].is_default);
    assert_eq!(datasources[1].access, DatasourceAccess::Direct);
    assert_eq!(datasources[1].basic_auth_user, "grafana");
}

#[tokio::test]
async fn test_get_datasource_by_id() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("datasources/get_datasource.json");

    Mock::given(method("GET"))
        .and(path("/api/datasources/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let datasource = client.get_datasource(2).await.unwrap();
    assert_eq!(datasource.id(), 2);
    assert_eq!(datasource.kind, "graphite");
}

#[tokio::test]
async fn test_get_datasource_not_found() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("errors/datasource_not_found.json");

    Mock::given(method("GET"))
        .and(path("/api/datasources/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_datasource(99).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref what) if what == "datasource 99"));
}

#[tokio::test]
async fn test_get_datasource_by_name_encodes_path() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("datasources/get_datasource.json");

    Mock::given(method("GET"))
        .and(path("/api/datasources/name/My%20Graphite"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let datasource = client.get_datasource_by_name("My Graphite").await.unwrap();
    assert_eq!(datasource.name, "graphite");
}

#[tokio::test]
async fn test_get_datasource_by_empty_name_is_rejected() {
    let mock_server = MockServer::start().await;

    let client = client_for(&mock_server);
    let err = client.get_datasource_by_name("  ").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_server_error_message_is_extracted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "message": "Database locked" })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_datasources().await.unwrap_err();
    match err {
        ClientError::ApiError { status, message, url } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Database locked");
            assert!(url.ends_with("/api/datasources"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_error_body_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_datasources().await.unwrap_err();
    assert!(matches!(err, ClientError::ApiError { status: 502, ref message, .. } if message == "Bad Gateway"));
}
