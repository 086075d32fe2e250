//! Card and token record types.
//!
//! A [`Card`] is a single-use activation key. Redeeming it attaches a token,
//! marks it used, and yields the [`TokenRecord`] appended to the audit log.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};

/// A single-use activation key.
///
/// `status == Used` holds exactly when both `token` and `used_at` are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The key itself, `"{prefix}-{random}"`. Unique and immutable.
    pub key: String,

    /// Whether the card has been redeemed.
    pub status: CardStatus,

    /// When the card was issued.
    pub issued_at: NaiveDateTime,

    /// When the card stops validating, if ever.
    pub expires_at: Option<NaiveDateTime>,

    /// The token redeemed against this card.
    pub token: Option<String>,

    /// When the card was redeemed.
    pub used_at: Option<NaiveDateTime>,

    /// Free-form operator note.
    pub note: Option<String>,
}

impl Card {
    /// Create a fresh, unused card.
    #[must_use]
    pub fn issue(
        key: String,
        issued_at: NaiveDateTime,
        expires_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            key,
            status: CardStatus::Unused,
            issued_at,
            expires_at,
            token: None,
            used_at: None,
            note: None,
        }
    }

    /// Whether the card has been redeemed.
    #[must_use]
    pub fn is_used(&self) -> bool {
        self.status == CardStatus::Used
    }

    /// Whether the card's expiry lies strictly before `now`.
    ///
    /// Cards without an expiry never expire.
    #[must_use]
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }

    /// Redeem `token` against this card at `now`.
    ///
    /// Expiry is not checked here, only used-ness.
    ///
    /// # Errors
    ///
    /// Returns `CardError::AlreadyUsed` if the card was already redeemed; the
    /// card is left untouched in that case.
    pub fn redeem(&mut self, token: &str, now: NaiveDateTime) -> Result<TokenRecord> {
        if self.is_used() {
            return Err(CardError::AlreadyUsed {
                key: self.key.clone(),
            });
        }

        self.status = CardStatus::Used;
        self.token = Some(token.to_string());
        self.used_at = Some(now);

        Ok(TokenRecord {
            card_key: self.key.clone(),
            token: token.to_string(),
            recorded_at: now,
        })
    }
}

/// Redemption state of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    /// Issued and not yet redeemed.
    Unused,

    /// Redeemed. Terminal.
    Used,
}

/// An entry in the append-only token log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Key of the card the token was redeemed against.
    pub card_key: String,

    /// The submitted token.
    pub token: String,

    /// When the token was recorded.
    pub recorded_at: NaiveDateTime,
}
