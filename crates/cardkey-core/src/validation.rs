//! Outcome of checking a card key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Result of validating a card key.
///
/// An invalid card is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The card exists, has not expired, and is unused.
    Valid {
        /// The full card record.
        card: Card,
    },

    /// The card cannot be redeemed.
    Invalid {
        /// Why not.
        reason: InvalidReason,
    },
}

impl Validation {
    /// Whether the card may be redeemed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The rejection reason, if invalid.
    #[must_use]
    pub const fn reason(&self) -> Option<InvalidReason> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { reason } => Some(*reason),
        }
    }

    /// The card, if valid.
    #[must_use]
    pub const fn card(&self) -> Option<&Card> {
        match self {
            Self::Valid { card } => Some(card),
            Self::Invalid { .. } => None,
        }
    }
}

/// Why a card key failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// No card has this key.
    NotFound,

    /// The card's expiry has passed.
    Expired,

    /// The card was already redeemed.
    AlreadyUsed,
}

impl InvalidReason {
    /// Human-readable explanation.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotFound => "card key not found",
            Self::Expired => "card key has expired",
            Self::AlreadyUsed => "card key has already been used",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&InvalidReason::AlreadyUsed).unwrap(),
            "\"already_used\""
        );
        assert_eq!(
            serde_json::to_string(&InvalidReason::NotFound).unwrap(),
            "\"not_found\""
        );
    }

    #[test]
    fn invalid_has_no_card() {
        let outcome = Validation::Invalid {
            reason: InvalidReason::Expired,
        };
        assert!(!outcome.is_valid());
        assert!(outcome.card().is_none());
        assert_eq!(outcome.reason(), Some(InvalidReason::Expired));
    }
}
