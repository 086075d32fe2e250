//! Token redemption integration tests.

mod common;

use axum::http::StatusCode;
use chrono::Duration;
use common::TestHarness;
use serde_json::json;

use cardkey_core::Document;

// ============================================================================
// Submit Token
// ============================================================================

#[tokio::test]
async fn submit_token_success() {
    let harness = TestHarness::new();
    let key = harness.issue_one().await;

    let response = harness
        .server
        .post("/api/tokens")
        .json(&json!({ "cardKey": key, "token": "abcdefghij" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["message"].is_string());
    assert_eq!(body["record"]["card_key"], key);
    assert_eq!(body["record"]["token"], "abcdefghij");
    assert!(body["record"]["recorded_at"].is_string());
}

#[tokio::test]
async fn redeemed_card_no_longer_validates() {
    let harness = TestHarness::new();
    let key = harness.issue_one().await;

    harness
        .server
        .post("/api/tokens")
        .json(&json!({ "cardKey": key, "token": "abcdefghij" }))
        .await
        .assert_status_ok();

    let response = harness
        .server
        .post("/api/validate")
        .json(&json!({ "cardKey": key }))
        .await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["valid"], false);
    assert_eq!(body["reason"], "already_used");
}

#[tokio::test]
async fn submit_token_twice_fails() {
    let harness = TestHarness::new();
    let key = harness.issue_one().await;

    harness
        .server
        .post("/api/tokens")
        .json(&json!({ "cardKey": key, "token": "abcdefghij" }))
        .await
        .assert_status_ok();

    let response = harness
        .server
        .post("/api/tokens")
        .json(&json!({ "cardKey": key, "token": "klmnopqrstu" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "card_already_used");

    let tokens: serde_json::Value = harness.server.get("/api/tokens").await.json();
    assert_eq!(tokens["tokens"].as_array().unwrap().len(), 1);
    assert_eq!(tokens["tokens"][0]["token"], "abcdefghij");
}

#[tokio::test]
async fn submit_token_unknown_card_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/tokens")
        .json(&json!({ "cardKey": "VIP-UNKNOWNUNKNOWN", "token": "abcdefghij" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "card_not_found");
}

#[tokio::test]
async fn submit_token_on_expired_card_is_accepted() {
    let harness = TestHarness::new();
    let key = harness.issue(1, "VIP", Some(1)).await.remove(0);

    harness.clock.advance(Duration::days(2));

    let response = harness
        .server
        .post("/api/tokens")
        .json(&json!({ "cardKey": key, "token": "abcdefghij" }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn short_token_is_rejected() {
    let harness = TestHarness::new();
    let key = harness.issue_one().await;

    let response = harness
        .server
        .post("/api/tokens")
        .json(&json!({ "cardKey": key, "token": "  short   " }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let validate: serde_json::Value = harness
        .server
        .post("/api/validate")
        .json(&json!({ "cardKey": key }))
        .await
        .json();
    assert_eq!(validate["valid"], true);
}

#[tokio::test]
async fn submitted_values_are_trimmed() {
    let harness = TestHarness::new();
    let key = harness.issue_one().await;

    let response = harness
        .server
        .post("/api/tokens")
        .json(&json!({ "cardKey": format!(" {key} "), "token": "  abcdefghij\t" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["record"]["card_key"], key);
    assert_eq!(body["record"]["token"], "abcdefghij");
}

// ============================================================================
// Persistence
// ============================================================================

#[tokio::test]
async fn redemption_is_persisted() {
    let harness = TestHarness::new();
    let key = harness.issue_one().await;

    harness
        .server
        .post("/api/tokens")
        .json(&json!({ "cardKey": key, "token": "abcdefghij" }))
        .await
        .assert_status_ok();

    let text = std::fs::read_to_string(&harness.store_path).unwrap();
    let document: Document = serde_json::from_str(&text).unwrap();
    assert_eq!(document.cards.len(), 1);
    assert!(document.cards[0].is_used());
    assert_eq!(document.cards[0].token.as_deref(), Some("abcdefghij"));
    assert_eq!(document.tokens.len(), 1);
    assert_eq!(document.tokens[0].card_key, key);
}

#[tokio::test]
async fn list_tokens_in_redemption_order() {
    let harness = TestHarness::new();
    let keys = harness.issue(3, "VIP", None).await;

    for key in keys.iter().rev() {
        harness
            .server
            .post("/api/tokens")
            .json(&json!({ "cardKey": key, "token": format!("token-for-{key}") }))
            .await
            .assert_status_ok();
    }

    let response = harness.server.get("/api/tokens").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let card_keys: Vec<_> = body["tokens"]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["card_key"].as_str().unwrap().to_string())
        .collect();
    let expected: Vec<_> = keys.iter().rev().cloned().collect();
    assert_eq!(card_keys, expected);
}

#[tokio::test]
async fn submit_token_missing_fields_uses_error_envelope() {
    let harness = TestHarness::new();

    let response = harness.server.post("/api/tokens").json(&json!({})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "unprocessable");

    let tokens: serde_json::Value = harness.server.get("/api/tokens").await.json();
    assert!(tokens["tokens"].as_array().unwrap().is_empty());
}
