//! Common test utilities for cardkey integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use tempfile::TempDir;

use cardkey_core::ManualClock;
use cardkey_service::{create_router, AppState, Cards, ServiceConfig};
use cardkey_store::JsonFileStore;

/// Body of the front-end entry page served in tests.
pub const INDEX_HTML: &str = "<!doctype html><title>cardkey</title>";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the store and static files (kept alive for test duration).
    pub _temp_dir: TempDir,
    /// Clock driving the card service.
    pub clock: Arc<ManualClock>,
    /// Path of the JSON store.
    pub store_path: PathBuf,
}

impl TestHarness {
    /// Create a new test harness with a fresh store.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let static_dir = temp_dir.path().join("static");
        std::fs::create_dir_all(&static_dir).expect("Failed to create static dir");
        std::fs::write(static_dir.join("index.html"), INDEX_HTML).expect("Failed to write index");
        std::fs::write(static_dir.join("main.js"), "console.log('cardkey');")
            .expect("Failed to write script");

        let store_path = temp_dir.path().join("data").join("store.json");
        let clock = Arc::new(ManualClock::starting_now());
        let cards = Cards::with_clock(JsonFileStore::open(&store_path), clock.clone());

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            store_path: store_path.clone(),
            static_dir,
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(Arc::new(cards), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            _temp_dir: temp_dir,
            clock,
            store_path,
        }
    }

    /// Issue cards through the API and return their keys.
    pub async fn issue(&self, count: i64, prefix: &str, valid_days: Option<i64>) -> Vec<String> {
        let response = self
            .server
            .post("/api/cards")
            .json(&json!({
                "count": count,
                "prefix": prefix,
                "valid_days": valid_days,
            }))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        body["keys"]
            .as_array()
            .expect("keys array")
            .iter()
            .map(|key| key.as_str().expect("key string").to_string())
            .collect()
    }

    /// Issue a single card valid for 30 days.
    pub async fn issue_one(&self) -> String {
        self.issue(1, "VIP", Some(30)).await.remove(0)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
