// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::default_test_app;
use axum::http::StatusCode;

#[tokio::test]
async fn test_status_not_ready_before_any_scrape() {
    let app = default_test_app();

    let response = app.server.get("/api/status").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let json_response = response.json::<serde_json::Value>();
    assert_eq!(json_response["status"], "not ready");
}

#[tokio::test]
async fn test_status_ready_after_successful_scrape() {
    let app = default_test_app();

    let response = app
        .server
        .post("/api/request")
        .json(&serde_json::json!({"url": "http://example.com"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.server.get("/api/status").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let json_response = response.json::<serde_json::Value>();
    assert_eq!(json_response["status"], "ready");
}

#[tokio::test]
async fn test_status_is_a_pure_read() {
    let app = default_test_app();

    // Polling status repeatedly must not populate the slot
    for _ in 0..3 {
        let response = app.server.get("/api/status").await;
        let json_response = response.json::<serde_json::Value>();
        assert_eq!(json_response["status"], "not ready");
    }
    assert!(!app.store.is_ready());
}
