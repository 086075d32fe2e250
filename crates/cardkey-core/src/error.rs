//! Error types for cardkey.

/// Result type for cardkey operations.
pub type Result<T> = std::result::Result<T, CardError>;

/// Errors that can occur in cardkey operations.
///
/// Card validation never produces one of these for business reasons; an
/// invalid card is reported through [`crate::Validation`] instead.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    /// Issuance parameters out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No card with the given key.
    #[error("card not found: {key}")]
    NotFound {
        /// The card key that was not found.
        key: String,
    },

    /// The card has already been redeemed.
    #[error("card already used: {key}")]
    AlreadyUsed {
        /// The card key that was already used.
        key: String,
    },

    /// Persistence failure (unreadable, unwritable or malformed document).
    #[error("storage error: {0}")]
    Storage(String),
}

impl CardError {
    /// Whether this error is a business-rule rejection rather than a storage failure.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_is_not_a_rejection() {
        assert!(!CardError::Storage("disk full".into()).is_rejection());
        assert!(CardError::InvalidArgument("count".into()).is_rejection());
        assert!(CardError::NotFound { key: "X".into() }.is_rejection());
        assert!(CardError::AlreadyUsed { key: "X".into() }.is_rejection());
    }

    #[test]
    fn messages_name_the_key() {
        let err = CardError::AlreadyUsed {
            key: "VIP-ABC".into(),
        };
        assert_eq!(err.to_string(), "card already used: VIP-ABC");
    }
}
