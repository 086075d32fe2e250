//! Card issuance, validation and redemption on top of a [`Store`].
//!
//! Every mutating operation runs its load, mutate, save sequence under a
//! single writer lock, so two concurrent redemptions of one key cannot both
//! succeed. Reads take no lock.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDateTime;

use cardkey_core::{
    generate_key, Card, Clock, Document, IssueParams, Result, SystemClock,
    TokenRecord, Validation, DEFAULT_KEY_LENGTH,
};

use crate::Store;

/// The card service. Owns its store and clock.
pub struct CardService<S> {
    store: S,
    clock: Arc<dyn Clock>,
    writer: Mutex<()>,
}

impl<S: Store> CardService<S> {
    /// A service over `store` using wall-clock time.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// A service over `store` reading time from `clock`.
    #[must_use]
    pub fn with_clock(store: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            writer: Mutex::new(()),
        }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate a key with the default random length. Does not persist anything.
    #[must_use]
    pub fn generate_key(prefix: &str) -> String {
        generate_key(prefix, DEFAULT_KEY_LENGTH)
    }

    /// Issue a batch of unused cards and persist them.
    ///
    /// Returns the new keys in creation order.
    ///
    /// # Errors
    ///
    /// - `CardError::InvalidArgument` if `params` are out of range.
    /// - `CardError::Storage` if the document cannot be loaded or saved.
    pub fn issue_cards(&self, params: &IssueParams) -> Result<Vec<String>> {
        let keys = self.mutate(|document, now| document.issue(params, now))?;

        tracing::info!(
            count = keys.len(),
            prefix = %params.prefix,
            valid_days = ?params.expiry_days(),
            "Cards issued"
        );

        Ok(keys)
    }

    /// All cards in issuance order, used and expired ones included.
    ///
    /// # Errors
    ///
    /// Returns `CardError::Storage` if the document cannot be loaded.
    pub fn list_cards(&self) -> Result<Vec<Card>> {
        Ok(self.store.load()?.cards)
    }

    /// The token log in redemption order.
    ///
    /// # Errors
    ///
    /// Returns `CardError::Storage` if the document cannot be loaded.
    pub fn list_tokens(&self) -> Result<Vec<TokenRecord>> {
        Ok(self.store.load()?.tokens)
    }

    /// Check whether `key` may be redeemed right now. Read-only.
    ///
    /// # Errors
    ///
    /// Returns `CardError::Storage` if the document cannot be loaded. An
    /// unknown, expired or used card is an `Ok(Validation::Invalid)`.
    pub fn validate_card(&self, key: &str) -> Result<Validation> {
        let document = self.store.load()?;
        let outcome = document.validate(key, self.clock.now());

        if let Some(reason) = outcome.reason() {
            tracing::debug!(key = %key, reason = ?reason, "Card rejected");
        }

        Ok(outcome)
    }

    /// Redeem `token` against `key`: mark the card used, append a token record, persist.
    ///
    /// Expiry is not checked here.
    ///
    /// # Errors
    ///
    /// - `CardError::NotFound` if no card has this key.
    /// - `CardError::AlreadyUsed` if the card was already redeemed.
    /// - `CardError::Storage` if the document cannot be loaded or saved.
    ///
    /// On any error nothing is written.
    pub fn store_token(&self, key: &str, token: &str) -> Result<TokenRecord> {
        let result = self.mutate(|document, now| document.redeem(key, token, now));

        match &result {
            Ok(record) => tracing::info!(key = %record.card_key, "Token recorded"),
            Err(e) if e.is_rejection() => {
                tracing::warn!(key = %key, error = %e, "Token rejected");
            }
            Err(e) => tracing::error!(key = %key, error = %e, "Token not stored"),
        }

        result
    }

    /// Load, apply `f`, and save only if `f` succeeded, all under the writer lock.
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Document, NaiveDateTime) -> Result<T>,
    ) -> Result<T> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let mut document = self.store.load()?;
        let value = f(&mut document, self.clock.now())?;
        self.store.save(&document)?;

        Ok(value)
    }
}
