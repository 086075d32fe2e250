//! The persisted document: every card and every token record.
//!
//! The document is always loaded and saved as a whole. The operations here
//! mutate an in-memory copy; persisting it is the store's job.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::card::{Card, TokenRecord};
use crate::error::{CardError, Result};
use crate::issue::IssueParams;
use crate::key::{generate_key, has_key_shape, key_space};
use crate::validation::{InvalidReason, Validation};

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// Documents written before the version field existed are version 1.
const fn legacy_version() -> u32 {
    1
}

/// All cards and token records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Schema version of the document.
    #[serde(default = "legacy_version")]
    pub version: u32,

    /// Cards in issuance order.
    #[serde(default)]
    pub cards: Vec<Card>,

    /// Token records in redemption order. Append-only.
    #[serde(default)]
    pub tokens: Vec<TokenRecord>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document at the current schema version.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            version: SCHEMA_VERSION,
            cards: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Find a card by exact key.
    #[must_use]
    pub fn find_card(&self, key: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.key == key)
    }

    fn find_card_mut(&mut self, key: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.key == key)
    }

    /// Issue a batch of fresh cards at `now`, returning their keys in creation order.
    ///
    /// Every key is unique across the document; a generated key that collides
    /// with an existing one is drawn again.
    ///
    /// # Errors
    ///
    /// Returns `CardError::InvalidArgument` if `params` are out of range or
    /// fewer than `count` unused keys of this prefix and length remain; the
    /// document is untouched in that case.
    pub fn issue(&mut self, params: &IssueParams, now: NaiveDateTime) -> Result<Vec<String>> {
        params.validate()?;

        let used = self
            .cards
            .iter()
            .filter(|card| has_key_shape(&card.key, &params.prefix, params.key_length))
            .count();
        let free = key_space(params.key_length).saturating_sub(used);
        if free < params.count {
            return Err(CardError::InvalidArgument(format!(
                "only {free} keys left for prefix {} with key_length {}",
                params.prefix, params.key_length
            )));
        }

        let expires_at = params
            .expiry_days()
            .map(|days| now + Duration::days(i64::from(days)));

        let mut taken: HashSet<String> = self.cards.iter().map(|card| card.key.clone()).collect();
        let mut keys = Vec::with_capacity(params.count);
        while keys.len() < params.count {
            let key = generate_key(&params.prefix, params.key_length);
            if taken.insert(key.clone()) {
                keys.push(key);
            }
        }

        self.cards.extend(
            keys.iter()
                .map(|key| Card::issue(key.clone(), now, expires_at)),
        );

        Ok(keys)
    }

    /// Classify the card with `key` as of `now`.
    ///
    /// Expiry is checked before used-ness, so an expired card that was also
    /// redeemed reports `Expired`.
    #[must_use]
    pub fn validate(&self, key: &str, now: NaiveDateTime) -> Validation {
        let Some(card) = self.find_card(key) else {
            return Validation::Invalid {
                reason: InvalidReason::NotFound,
            };
        };

        if card.is_expired(now) {
            return Validation::Invalid {
                reason: InvalidReason::Expired,
            };
        }

        if card.is_used() {
            return Validation::Invalid {
                reason: InvalidReason::AlreadyUsed,
            };
        }

        Validation::Valid { card: card.clone() }
    }

    /// Redeem `token` against the card with `key` and append the token record.
    ///
    /// # Errors
    ///
    /// - `CardError::NotFound` if no card has this key.
    /// - `CardError::AlreadyUsed` if the card was already redeemed.
    ///
    /// On error the document is unchanged.
    pub fn redeem(&mut self, key: &str, token: &str, now: NaiveDateTime) -> Result<TokenRecord> {
        let card = self.find_card_mut(key).ok_or_else(|| CardError::NotFound {
            key: key.to_string(),
        })?;

        let record = card.redeem(token, now)?;
        self.tokens.push(record.clone());

        Ok(record)
    }
}
