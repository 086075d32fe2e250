//! Document storage layer and card service for cardkey.
//!
//! The whole state (all cards and token records) lives in a single
//! [`Document`] that is loaded and saved as a unit. This crate provides:
//!
//! - [`Store`]: the load/save primitives
//! - [`JsonFileStore`]: a pretty-printed JSON file, replaced atomically on save
//! - [`MemoryStore`]: an in-process store for tests and embedding
//! - [`CardService`]: issuance, listing, validation and redemption on top of a store
//!
//! # Example
//!
//! ```no_run
//! use cardkey_core::IssueParams;
//! use cardkey_store::{CardService, JsonFileStore};
//!
//! let service = CardService::new(JsonFileStore::open("data/store.json"));
//!
//! let keys = service.issue_cards(&IssueParams::new(1, "VIP", Some(30))).unwrap();
//! assert!(service.validate_card(&keys[0]).unwrap().is_valid());
//!
//! let record = service.store_token(&keys[0], "abcdefghij").unwrap();
//! assert_eq!(record.card_key, keys[0]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod json;
pub mod memory;
pub mod schema;
pub mod service;

pub use error::{Result, StoreError};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use service::CardService;

use cardkey_core::Document;

/// The storage trait: whole-document load and save.
///
/// There is no partial-update API. Every mutation is load, mutate in memory,
/// save; [`CardService`] serializes those sequences.
pub trait Store: Send + Sync {
    /// Load the current document.
    ///
    /// If no document exists yet, an empty one is created and persisted first.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium is unreadable, holds malformed data, or
    /// holds a document of an unsupported schema version.
    fn load(&self) -> Result<Document>;

    /// Overwrite the stored document in full.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&self, document: &Document) -> Result<()>;
}
