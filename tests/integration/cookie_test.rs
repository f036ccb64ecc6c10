// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, FailingCookieLoader, StubCookieLoader, StubScraper};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_empty_cookie_store_returns_404() {
    let app = create_test_app(StubScraper::new(), StubCookieLoader::empty());

    let response = app.server.get("/api/cookies").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let json_response = response.json::<serde_json::Value>();
    assert_eq!(json_response["error"], "No cookies available");
}

#[tokio::test]
async fn test_cookie_payload_is_returned_verbatim() {
    let payload = json!([
        {"name": "session", "value": "abc123", "domain": "example.com"},
        {"name": "theme", "value": "dark", "domain": "example.com"}
    ]);
    let app = create_test_app(
        StubScraper::new(),
        StubCookieLoader::with_payload(payload.clone()),
    );

    let response = app.server.get("/api/cookies").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), payload);
}

#[tokio::test]
async fn test_cookie_load_does_not_touch_scrape_slot() {
    let app = create_test_app(
        StubScraper::new(),
        StubCookieLoader::with_payload(json!([{"name": "session", "value": "abc123"}])),
    );

    let response = app.server.get("/api/cookies").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    assert!(!app.store.is_ready());
    let response = app.server.get("/api/data").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cookie_loader_failure_maps_to_502() {
    let app = create_test_app(StubScraper::new(), FailingCookieLoader);

    let response = app.server.get("/api/cookies").await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let json_response = response.json::<serde_json::Value>();
    assert!(json_response["error"].is_string());
}
