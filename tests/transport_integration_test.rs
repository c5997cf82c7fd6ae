mod common;

use common::{client_for, only_request};
use serde_json::json;
use sonarqube_client::{Params, SonarQubeClient, SonarQubeError};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn error_for(status: u16, body: serde_json::Value) -> SonarQubeError {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/search"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .transport()
        .get("/api/projects/search", &Params::new())
        .await
        .expect_err("Request should fail")
}

/// Each HTTP status maps to its own error kind
#[tokio::test]
async fn test_status_classification() {
    let _ = env_logger::try_init();

    let err = error_for(401, json!({"errors": [{"msg": "Unauthorized"}]})).await;
    assert!(matches!(err, SonarQubeError::Authentication { .. }));
    assert_eq!(err.message(), "Unauthorized");
    assert_eq!(err.status_code(), Some(401));

    let err = error_for(403, json!({"errors": [{"msg": "Insufficient privileges"}]})).await;
    assert!(matches!(err, SonarQubeError::Permission { .. }));
    assert_eq!(err.status_code(), Some(403));

    let err = error_for(404, json!({"errors": [{"msg": "Component not found"}]})).await;
    assert!(matches!(err, SonarQubeError::NotFound { .. }));
    assert_eq!(err.message(), "Component not found");

    let err = error_for(500, json!({"errors": [{"msg": "Boom"}]})).await;
    assert!(matches!(err, SonarQubeError::Api { status: 500, .. }));
    assert!(err.is_api_error());
    assert!(!err.is_connection_error());
}

/// 400 keeps every sub-error and uses the first as the message
#[tokio::test]
async fn test_validation_error_keeps_all_messages() {
    let _ = env_logger::try_init();

    let err = error_for(
        400,
        json!({"errors": [{"msg": "Name is missing"}, {"msg": "Key is too long"}]}),
    )
    .await;

    assert!(matches!(err, SonarQubeError::Validation { .. }));
    assert_eq!(err.message(), "Name is missing");
    assert_eq!(err.errors().len(), 2);
    assert_eq!(err.errors()[1].msg, "Key is too long");
    assert!(err.details().is_some());
}

/// A non-JSON error body becomes the message
#[tokio::test]
async fn test_plain_text_error_body() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/status"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.system().status().await.expect_err("Should fail");
    assert_eq!(err.status_code(), Some(502));
    assert_eq!(err.message(), "Bad Gateway");
}

#[tokio::test]
async fn test_no_content_returns_empty_object() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects/delete"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let value = client
        .transport()
        .post("/api/projects/delete", &Params::new().with("project", "my-project"))
        .await
        .expect("204 should succeed");
    assert_eq!(value, json!({}));

    client
        .projects()
        .delete("my-project")
        .await
        .expect("delete should succeed");
}

#[tokio::test]
async fn test_success_with_non_json_body() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/liveness"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK but not JSON"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let value = client
        .transport()
        .get("/api/system/liveness", &Params::new())
        .await
        .expect("Should succeed");
    assert_eq!(value, json!({}));
}

/// A success body missing required fields is an invalid response
#[tokio::test]
async fn test_model_mismatch() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "UP"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.system().status().await.expect_err("Should fail");
    assert!(matches!(err, SonarQubeError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_connection_refused() {
    let _ = env_logger::try_init();

    let client = SonarQubeClient::anonymous("http://127.0.0.1:1").expect("Failed to create client");
    let err = client.system().status().await.expect_err("Should fail");

    assert!(err.is_connection_error());
    assert!(!err.is_api_error());
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_timeout() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "x", "version": "10.4", "status": "UP"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = SonarQubeClient::builder(server.uri())
        .timeout(Duration::from_millis(200))
        .build()
        .expect("Failed to create client");
    let err = client.system().status().await.expect_err("Should time out");

    assert!(err.is_connection_error());
    assert!(err.message().contains("timed out"));
}

/// Every request carries JSON accept and the auth header
#[tokio::test]
async fn test_default_headers() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/status"))
        .and(header("Accept", "application/json"))
        .and(header("Authorization", "Basic bXktdG9rZW46"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "x", "version": "10.4", "status": "UP"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let status = client.system().status().await.expect("Should succeed");
    assert_eq!(status.status, "UP");
}

#[tokio::test]
async fn test_requests_after_close_fail() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    let client = client_for(&server);
    client.close();
    client.close();

    let err = client.system().status().await.expect_err("Closed client should fail");
    assert!(err.is_connection_error());
    assert!(err.message().contains("closed"));

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

/// Absent query parameters never reach the wire
#[tokio::test]
async fn test_absent_params_omitted() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rules/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.rules().tags(None, None).await.expect("Should succeed");

    let request = only_request(&server).await;
    assert_eq!(request.url.query(), None);
}
