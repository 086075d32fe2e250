//! In-memory storage implementation.

use std::sync::{Mutex, PoisonError};

use cardkey_core::Document;

use crate::error::Result;
use crate::Store;

/// Keeps the document in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Document>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with `document`.
    #[must_use]
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Document> {
        Ok(self
            .document
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, document: &Document) -> Result<()> {
        *self.document.lock().unwrap_or_else(PoisonError::into_inner) = document.clone();
        Ok(())
    }
}
