mod common;

use common::{client_for, form_map, form_values, only_request, query_of};
use serde_json::json;
use sonarqube_client::models::{ApplicationBranchRequest, HotspotSearchRequest, Visibility};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test reading measures of a project
#[tokio::test]
async fn test_component_measures() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/measures/component"))
        .and(query_param("metricKeys", "coverage,bugs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "component": {
                "key": "my-project",
                "name": "My Project",
                "qualifier": "TRK",
                "measures": [
                    {"metric": "coverage", "value": "87.5", "bestValue": false},
                    {"metric": "bugs", "value": "3"}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let metrics = vec!["coverage".to_string(), "bugs".to_string()];
    let response = client
        .measures()
        .component("my-project", &metrics, None, None, None)
        .await
        .expect("Failed to get measures");

    let coverage = response
        .component
        .measure("coverage")
        .and_then(|m| m.as_f64());
    assert_eq!(coverage, Some(87.5));
    assert!(response.component.measure("ncloc").is_none());
}

#[tokio::test]
async fn test_component_show() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/components/show"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "component": {"key": "my-project", "name": "My Project", "qualifier": "TRK"},
            "ancestors": []
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .components()
        .show("my-project", Some("develop"), None)
        .await
        .expect("Failed to show component");
    assert_eq!(response.component.key, "my-project");

    let query = query_of(&only_request(&server).await);
    assert_eq!(query.get("branch").map(String::as_str), Some("develop"));
    assert!(!query.contains_key("pullRequest"));
}

#[tokio::test]
async fn test_search_hotspots() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hotspots/search"))
        .and(query_param("projectKey", "my-project"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paging": {"pageIndex": 1, "pageSize": 100, "total": 1},
            "hotspots": [{
                "key": "HS-1",
                "component": "my-project:src/db.rs",
                "project": "my-project",
                "securityCategory": "sql-injection",
                "vulnerabilityProbability": "HIGH",
                "status": "TO_REVIEW"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .hotspots()
        .search(&HotspotSearchRequest::project("my-project"))
        .await
        .expect("Failed to search hotspots");
    assert_eq!(
        response.hotspots[0].vulnerability_probability.as_deref(),
        Some("HIGH")
    );
}

#[tokio::test]
async fn test_review_hotspot() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/hotspots/change_status"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .hotspots()
        .change_status("HS-1", "REVIEWED", None, Some("SAFE"))
        .await
        .expect("Failed to change status");

    let form = form_map(&only_request(&server).await);
    assert_eq!(form.get("status").map(String::as_str), Some("REVIEWED"));
    assert_eq!(form.get("resolution").map(String::as_str), Some("SAFE"));
    assert!(!form.contains_key("comment"));
}

#[tokio::test]
async fn test_create_application() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/applications/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "application": {
                "key": "my-app",
                "name": "My App",
                "visibility": "private",
                "projects": []
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .applications()
        .create("My App", None, Some("my-app"), Some(Visibility::Private))
        .await
        .expect("Failed to create application");
    assert_eq!(response.application.key, "my-app");

    let form = form_map(&only_request(&server).await);
    assert_eq!(form.get("visibility").map(String::as_str), Some("private"));
    assert!(!form.contains_key("description"));
}

#[tokio::test]
async fn test_create_application_branch() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/applications/create_branch"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut request = ApplicationBranchRequest::new(
        "my-app",
        "release-1",
        vec!["alpha".to_string(), "beta".to_string()],
    );
    request.project_branches = Some(vec!["release-1".to_string(), "main".to_string()]);
    client
        .applications()
        .create_branch(&request)
        .await
        .expect("Failed to create branch");

    let sent = only_request(&server).await;
    assert_eq!(form_values(&sent, "project"), vec!["alpha", "beta"]);
    assert_eq!(form_values(&sent, "projectBranch"), vec!["release-1", "main"]);
    assert!(form_values(&sent, "name").is_empty());
}
