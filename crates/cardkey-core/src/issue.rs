//! Issuance parameters and input limits.

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};
use crate::key::{DEFAULT_KEY_LENGTH, MAX_KEY_LENGTH};

// ============================================================================
// Constants
// ============================================================================

/// Largest batch a single issuance may create.
pub const MAX_ISSUE_COUNT: usize = 100;

/// Longest accepted key prefix, in characters.
pub const MAX_PREFIX_LEN: usize = 10;

/// Longest accepted validity period, in days.
pub const MAX_VALID_DAYS: u32 = 365;

/// Prefix used when the caller does not supply one.
pub const DEFAULT_PREFIX: &str = "VIP";

/// Validity period used when the caller does not supply one.
pub const DEFAULT_VALID_DAYS: u32 = 30;

/// Shortest card key accepted at the API boundary.
pub const MIN_CARD_KEY_LEN: usize = 5;

/// Shortest token accepted at the API boundary.
pub const MIN_TOKEN_LEN: usize = 10;

/// Parameters for a batch issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueParams {
    /// Number of cards to create, in `1..=MAX_ISSUE_COUNT`.
    pub count: usize,

    /// Key prefix, 1 to `MAX_PREFIX_LEN` characters.
    pub prefix: String,

    /// Days until the cards expire. `None` or `Some(0)` means never.
    pub valid_days: Option<u32>,

    /// Length of the random part of each key.
    pub key_length: usize,
}

impl IssueParams {
    /// Parameters with the default key length.
    #[must_use]
    pub fn new(count: usize, prefix: impl Into<String>, valid_days: Option<u32>) -> Self {
        Self {
            count,
            prefix: prefix.into(),
            valid_days,
            key_length: DEFAULT_KEY_LENGTH,
        }
    }

    /// Check every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `CardError::InvalidArgument` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.count < 1 {
            return Err(CardError::InvalidArgument(
                "count must be at least 1".into(),
            ));
        }
        if self.count > MAX_ISSUE_COUNT {
            return Err(CardError::InvalidArgument(format!(
                "count must be at most {MAX_ISSUE_COUNT}"
            )));
        }

        let prefix_len = self.prefix.chars().count();
        if prefix_len == 0 || prefix_len > MAX_PREFIX_LEN {
            return Err(CardError::InvalidArgument(format!(
                "prefix must be 1 to {MAX_PREFIX_LEN} characters"
            )));
        }

        if self.valid_days.is_some_and(|days| days > MAX_VALID_DAYS) {
            return Err(CardError::InvalidArgument(format!(
                "valid_days must be at most {MAX_VALID_DAYS}"
            )));
        }

        if self.key_length == 0 || self.key_length > MAX_KEY_LENGTH {
            return Err(CardError::InvalidArgument(format!(
                "key_length must be 1 to {MAX_KEY_LENGTH}"
            )));
        }

        Ok(())
    }

    /// The validity period, if the cards expire at all.
    #[must_use]
    pub fn expiry_days(&self) -> Option<u32> {
        self.valid_days.filter(|&days| days > 0)
    }
}

impl Default for IssueParams {
    fn default() -> Self {
        Self::new(1, DEFAULT_PREFIX, Some(DEFAULT_VALID_DAYS))
    }
}
