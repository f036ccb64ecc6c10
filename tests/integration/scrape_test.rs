// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, default_test_app, FailingScraper, StubCookieLoader, StubScraper};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_trigger_scrape_stores_payload() {
    let app = default_test_app();

    let response = app
        .server
        .post("/api/request")
        .json(&json!({"url": "http://example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let json_response = response.json::<serde_json::Value>();
    assert_eq!(json_response["message"], "Data scraping initiated");

    let response = app.server.get("/api/data").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({"title": "Example"})
    );
}

#[tokio::test]
async fn test_missing_url_returns_400_and_leaves_slot_untouched() {
    let app = default_test_app();

    let response = app.server.post("/api/request").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let json_response = response.json::<serde_json::Value>();
    assert_eq!(json_response["error"], "URL is required");
    assert!(!app.store.is_ready());
}

#[tokio::test]
async fn test_blank_url_returns_400() {
    let app = default_test_app();

    let response = app
        .server
        .post("/api/request")
        .json(&json!({"url": "   "}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let json_response = response.json::<serde_json::Value>();
    assert_eq!(json_response["error"], "URL is required");
}

#[tokio::test]
async fn test_second_scrape_fully_overwrites_first() {
    let app = create_test_app(
        StubScraper::new()
            .with_response("http://example.com", json!({"title": "Example", "links": 12}))
            .with_response("http://other.example", json!({"title": "Other"})),
        StubCookieLoader::empty(),
    );

    app.server
        .post("/api/request")
        .json(&json!({"url": "http://example.com"}))
        .await;
    app.server
        .post("/api/request")
        .json(&json!({"url": "http://other.example"}))
        .await;

    let response = app.server.get("/api/data").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    // Prior value fully replaced, not merged: no "links" field survives
    assert_eq!(response.json::<serde_json::Value>(), json!({"title": "Other"}));
}

#[tokio::test]
async fn test_null_payload_still_flips_status_to_ready() {
    let app = create_test_app(
        StubScraper::new().with_response("http://example.com", serde_json::Value::Null),
        StubCookieLoader::empty(),
    );

    let response = app
        .server
        .post("/api/request")
        .json(&json!({"url": "http://example.com"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.server.get("/api/status").await;
    assert_eq!(response.json::<serde_json::Value>()["status"], "ready");

    let response = app.server.get("/api/data").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), serde_json::Value::Null);
}

#[tokio::test]
async fn test_get_data_before_any_scrape_returns_404() {
    let app = default_test_app();

    let response = app.server.get("/api/data").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let json_response = response.json::<serde_json::Value>();
    assert_eq!(json_response["error"], "No data available");
}

#[tokio::test]
async fn test_engine_failure_maps_to_502() {
    let app = create_test_app(FailingScraper, StubCookieLoader::empty());

    let response = app
        .server
        .post("/api/request")
        .json(&json!({"url": "http://example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let json_response = response.json::<serde_json::Value>();
    assert!(json_response["error"].is_string());
    // The failed request leaves the slot untouched
    assert!(!app.store.is_ready());
}
