mod common;

use common::{client_for, form_map, form_of, form_values, only_request, query_of};
use serde_json::json;
use sonarqube_client::models::{SettingSetRequest, SystemInfo, UserCreateRequest};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test ping returns the plain-text body
#[tokio::test]
async fn test_ping() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reply = client.system().ping().await.expect("Failed to ping");
    assert_eq!(reply, "pong");
}

#[tokio::test]
async fn test_health_and_info() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"health": "GREEN", "causes": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/system/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Health": "YELLOW",
            "Health Causes": ["Elasticsearch status is YELLOW"],
            "System": {"Version": "10.4.0", "Edition": "Community"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let health = client.system().health().await.expect("Failed to get health");
    assert!(health.is_green());

    let raw = client.system().info().await.expect("Failed to get info");
    let info: SystemInfo = serde_json::from_value(raw).expect("Unexpected info layout");
    assert_eq!(info.health.as_deref(), Some("YELLOW"));
    assert_eq!(info.causes.map(|c| c.len()), Some(1));
}

#[tokio::test]
async fn test_liveness_no_content() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/system/liveness"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.system().liveness().await.expect("Server should be alive");
}

#[tokio::test]
async fn test_raw_source() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sources/raw"))
        .and(query_param("key", "my-project:src/main.rs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("fn main() {\n}\n"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let source = client
        .sources()
        .raw("my-project:src/main.rs", None, None)
        .await
        .expect("Failed to get source");
    assert_eq!(source.lines().count(), 2);
}

#[tokio::test]
async fn test_source_lines_range() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sources/lines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sources": [
                {"line": 10, "code": "let x = 1;", "scmAuthor": "dev"},
                {"line": 11, "code": "let y = 2;"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .sources()
        .lines("my-project:src/main.rs", None, Some(10), None, Some(11))
        .await
        .expect("Failed to get lines");
    assert_eq!(response.sources.len(), 2);

    let query = query_of(&only_request(&server).await);
    assert_eq!(query.get("from").map(String::as_str), Some("10"));
    assert_eq!(query.get("to").map(String::as_str), Some("11"));
    assert!(!query.contains_key("branch"));
}

/// Property-set values are sent one parameter per entry
#[tokio::test]
async fn test_set_field_values() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/settings/set"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = SettingSetRequest {
        key: "sonar.issue.ignore.multicriteria".to_string(),
        field_values: Some(vec![
            r#"{"ruleKey":"java:S1","resourceKey":"**/gen/**"}"#.to_string(),
            r#"{"ruleKey":"java:S2","resourceKey":"**/test/**"}"#.to_string(),
        ]),
        component: Some("my-project".to_string()),
        ..Default::default()
    };
    client.settings().set(&request).await.expect("Failed to set");

    let form = form_of(&only_request(&server).await);
    let field_values: Vec<&str> = form
        .iter()
        .filter(|(k, _)| k == "fieldValues")
        .map(|(_, v)| v.as_str())
        .collect();
    assert_eq!(field_values.len(), 2);
    assert!(field_values[0].contains("java:S1"));
    assert!(!form.iter().any(|(k, _)| k == "value"));
}

/// Multi-value settings keep entries that contain commas intact
#[tokio::test]
async fn test_set_multiple_values() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/settings/set"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = SettingSetRequest {
        key: "sonar.exclusions".to_string(),
        values: Some(vec!["**/gen/**".to_string(), "**/{a,b}/**".to_string()]),
        ..Default::default()
    };
    client.settings().set(&request).await.expect("Failed to set");

    let sent = only_request(&server).await;
    assert_eq!(
        form_values(&sent, "values"),
        vec!["**/gen/**", "**/{a,b}/**"]
    );
}

#[tokio::test]
async fn test_update_user_scm_accounts() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/update"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"login": "jdoe", "name": "John Doe", "active": true}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let accounts = vec!["jdoe".to_string(), "Doe, John".to_string()];
    let user = client
        .users()
        .update("jdoe", None, None, Some(accounts.as_slice()))
        .await
        .expect("Failed to update user");
    assert_eq!(user.login, "jdoe");

    let sent = only_request(&server).await;
    assert_eq!(form_values(&sent, "scmAccount"), vec!["jdoe", "Doe, John"]);
    assert!(form_values(&sent, "email").is_empty());
}

#[tokio::test]
async fn test_setting_values() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/settings/values"))
        .and(query_param("keys", "sonar.exclusions,sonar.coverage.exclusions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "settings": [{"key": "sonar.exclusions", "values": ["**/gen/**"]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let keys = vec![
        "sonar.exclusions".to_string(),
        "sonar.coverage.exclusions".to_string(),
    ];
    let response = client
        .settings()
        .values(None, Some(&keys))
        .await
        .expect("Failed to get settings");
    assert_eq!(response.settings[0].values, Some(vec!["**/gen/**".to_string()]));
}

#[tokio::test]
async fn test_create_and_deactivate_user() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"login": "jdoe", "name": "John Doe", "active": true, "local": true}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/users/deactivate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"login": "jdoe", "name": "John Doe", "active": false}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .users()
        .create(&UserCreateRequest::new("jdoe", "John Doe").password("s3cret!"))
        .await
        .expect("Failed to create user");
    assert_eq!(created.user.active, Some(true));

    let user = client
        .users()
        .deactivate("jdoe", Some(true))
        .await
        .expect("Failed to deactivate user");
    assert_eq!(user.active, Some(false));

    let requests = server.received_requests().await.unwrap_or_default();
    let create_form = form_map(&requests[0]);
    assert_eq!(create_form.get("password").map(String::as_str), Some("s3cret!"));
    let deactivate_form = form_map(&requests[1]);
    assert_eq!(deactivate_form.get("anonymize").map(String::as_str), Some("true"));
}

#[tokio::test]
async fn test_generate_token() {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user_tokens/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "jdoe",
            "name": "ci",
            "token": "squ_0123456789",
            "type": "USER_TOKEN",
            "createdAt": "2024-01-15T10:30:00+0000"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let generated = client
        .user_tokens()
        .generate("ci", None, None, None, Some("USER_TOKEN"))
        .await
        .expect("Failed to generate token");

    assert_eq!(generated.token, "squ_0123456789");
    assert!(!format!("{:?}", generated).contains("squ_0123456789"));

    let form = form_map(&only_request(&server).await);
    assert_eq!(form.get("type").map(String::as_str), Some("USER_TOKEN"));
    assert!(!form.contains_key("login"));
}
