//! Application state.

use std::sync::Arc;

use cardkey_store::{CardService, JsonFileStore};

use crate::config::ServiceConfig;

/// The card service as deployed: backed by the JSON file store.
pub type Cards = CardService<JsonFileStore>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The card service.
    pub cards: Arc<Cards>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(cards: Arc<Cards>, config: ServiceConfig) -> Self {
        tracing::info!(
            store_path = %cards.store().path().display(),
            "Card service ready"
        );

        Self { cards, config }
    }
}
