//! Cardkey Service - HTTP API for card key issuance and redemption
//!
//! This is the main entry point for the cardkey service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardkey_service::{create_router, AppState, Cards, ServiceConfig};
use cardkey_store::{JsonFileStore, Store};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cardkey=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cardkey Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        store_path = %config.store_path.display(),
        static_dir = %config.static_dir.display(),
        "Service configuration loaded"
    );

    // Open the card store; loading once creates it and fails fast on a bad document
    let store = JsonFileStore::open(&config.store_path);
    let document = store.load()?;
    tracing::info!(
        cards = document.cards.len(),
        tokens = document.tokens.len(),
        "Card store loaded"
    );

    // Build app state
    let state = AppState::new(Arc::new(Cards::new(store)), config.clone());

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
