//! Core types and utilities for cardkey.
//!
//! This crate provides the foundational types used throughout the cardkey service:
//!
//! - **Cards**: `Card`, `CardStatus`, `TokenRecord`
//! - **Document**: `Document`, the whole persisted state
//! - **Keys**: `generate_key`, `KEY_ALPHABET`
//! - **Issuance**: `IssueParams` and its limits
//! - **Validation**: `Validation`, `InvalidReason`
//! - **Time**: `Clock`, `SystemClock`, `ManualClock`
//!
//! # Card lifecycle
//!
//! A card is issued `unused` and moves to `used` exactly once, when a token is
//! redeemed against it. Expiry is never stored as a status; it is derived from
//! `expires_at` at read time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod card;
pub mod clock;
pub mod document;
pub mod error;
pub mod issue;
pub mod key;
pub mod validation;

pub use card::{Card, CardStatus, TokenRecord};
pub use clock::{now_utc, Clock, ManualClock, SystemClock};
pub use document::{Document, SCHEMA_VERSION};
pub use error::{CardError, Result};
pub use issue::{
    IssueParams, DEFAULT_PREFIX, DEFAULT_VALID_DAYS, MAX_ISSUE_COUNT, MAX_PREFIX_LEN,
    MAX_VALID_DAYS, MIN_CARD_KEY_LEN, MIN_TOKEN_LEN,
};
pub use key::{
    generate_key, has_key_shape, key_space, DEFAULT_KEY_LENGTH, KEY_ALPHABET, MAX_KEY_LENGTH,
};
pub use validation::{InvalidReason, Validation};
