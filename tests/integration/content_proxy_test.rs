// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    create_test_server, create_test_server_with, upstream_settings, CONTENTS_ACTION,
    TEST_CONNECTION_KEY, TEST_SECRET,
};
use axum::http::StatusCode;
use competitor_finder::presentation::routes::GET_CONTENTS_PATH;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INVALID_URLS: &str = "Invalid or missing 'urls' array";

#[tokio::test]
async fn test_get_contents_relays_upstream_body_verbatim() {
    let upstream = MockServer::start().await;
    let upstream_body = r#"{"results":[{"url":"https://acme.com","title":"Acme","text":"line one\nline two","highlights":["a"]}],"costDollars":{"total":0.001}}"#;

    Mock::given(method("POST"))
        .and(path("/contents"))
        .and(header("x-pica-secret", TEST_SECRET))
        .and(header("x-pica-connection-key", TEST_CONNECTION_KEY))
        .and(header("x-pica-action-id", CONTENTS_ACTION))
        .and(body_json(json!({ "urls": ["https://acme.com"] })))
        .respond_with(ResponseTemplate::new(200).set_body_string(upstream_body))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = create_test_server(&upstream);
    let response = server
        .post(GET_CONTENTS_PATH)
        .json(&json!({ "urls": ["https://acme.com"] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), upstream_body);
}

#[tokio::test]
async fn test_get_contents_rejects_invalid_urls() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let server = create_test_server(&upstream);

    for body in [
        json!({}),
        json!({ "urls": null }),
        json!({ "urls": "https://acme.com" }),
        json!({ "urls": [] }),
        json!({ "urls": [1, 2] }),
    ] {
        let response = server.post(GET_CONTENTS_PATH).json(&body).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "body: {}", body);
        let body: Value = response.json();
        assert_eq!(body["error"], INVALID_URLS);
    }
}

#[tokio::test]
async fn test_get_contents_rejects_malformed_body() {
    let upstream = MockServer::start().await;
    let server = create_test_server(&upstream);

    let response = server
        .post(GET_CONTENTS_PATH)
        .content_type("application/json")
        .text("urls=https://acme.com")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], INVALID_URLS);
}

/// 上游非成功状态码与响应文本被透传
#[tokio::test]
async fn test_get_contents_surfaces_upstream_status_and_text() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contents"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
        .mount(&upstream)
        .await;

    let server = create_test_server(&upstream);
    let response = server
        .post(GET_CONTENTS_PATH)
        .json(&json!({ "urls": ["https://acme.com"] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
    let body: Value = response.json();
    assert_eq!(body["error"], "rate limit exceeded");
}

#[tokio::test]
async fn test_get_contents_with_unreachable_upstream_is_server_error() {
    let upstream = MockServer::start().await;
    let settings = upstream_settings(&upstream);
    drop(upstream);

    let server = create_test_server_with(&settings);
    let response = server
        .post(GET_CONTENTS_PATH)
        .json(&json!({ "urls": ["https://acme.com"] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_get_contents_with_non_json_success_is_server_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&upstream)
        .await;

    let server = create_test_server(&upstream);
    let response = server
        .post(GET_CONTENTS_PATH)
        .json(&json!({ "urls": ["https://acme.com"] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
