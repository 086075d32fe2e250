//! Health endpoint and static front-end integration tests.

mod common;

use axum::http::StatusCode;
use common::{TestHarness, INDEX_HTML};

#[tokio::test]
async fn health_check_returns_ok() {
    let harness = TestHarness::new();

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn health_check_returns_json() {
    let harness = TestHarness::new();

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "cardkey");
}

#[tokio::test]
async fn index_serves_front_end() {
    let harness = TestHarness::new();

    let response = harness.server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.text(), INDEX_HTML);
}

#[tokio::test]
async fn static_assets_are_served() {
    let harness = TestHarness::new();

    let response = harness.server.get("/static/main.js").await;

    response.assert_status_ok();
    assert!(response.text().contains("cardkey"));
}

#[tokio::test]
async fn missing_static_asset_is_not_found() {
    let harness = TestHarness::new();

    let response = harness.server.get("/static/missing.css").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
