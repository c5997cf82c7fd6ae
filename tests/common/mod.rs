#![allow(dead_code)]

use sonarqube_client::SonarQubeClient;
use std::collections::HashMap;
use wiremock::{MockServer, Request};

/// Client pointed at the mock server, authenticated with a fixed token
pub fn client_for(server: &MockServer) -> SonarQubeClient {
    SonarQubeClient::builder(server.uri())
        .token("my-token")
        .build()
        .expect("Failed to create client")
}

/// Decoded query string of a recorded request
pub fn query_of(request: &Request) -> HashMap<String, String> {
    request.url.query_pairs().into_owned().collect()
}

/// Decoded form body of a recorded request, in wire order
pub fn form_of(request: &Request) -> Vec<(String, String)> {
    url::form_urlencoded::parse(&request.body)
        .into_owned()
        .collect()
}

/// Every value sent for a repeated form key, in order
pub fn form_values(request: &Request, key: &str) -> Vec<String> {
    form_of(request)
        .into_iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v)
        .collect()
}

pub fn form_map(request: &Request) -> HashMap<String, String> {
    form_of(request).into_iter().collect()
}

/// The single request the server received
pub async fn only_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("Request recording is disabled");
    assert_eq!(requests.len(), 1, "Expected exactly one request");
    requests.remove(0)
}
