//! Request and response types for the cardkey client.

use serde::{Deserialize, Serialize};

pub use cardkey_core::{Card, CardStatus, InvalidReason, TokenRecord};

/// Card validation request.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateRequest {
    /// The card key.
    #[serde(rename = "cardKey")]
    pub card_key: String,
}

/// Card validation response.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateResponse {
    /// Whether the card may be redeemed.
    pub valid: bool,
    /// The card, when valid.
    #[serde(default)]
    pub card: Option<Card>,
    /// Machine-readable rejection reason, when invalid.
    #[serde(default)]
    pub reason: Option<InvalidReason>,
    /// Human-readable rejection reason, when invalid.
    #[serde(default)]
    pub message: Option<String>,
}

/// Token submission request.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    /// The card key being redeemed.
    #[serde(rename = "cardKey")]
    pub card_key: String,
    /// The token to record.
    pub token: String,
}

/// Token submission response.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitTokenResponse {
    /// Confirmation message.
    pub message: String,
    /// The recorded token.
    pub record: TokenRecord,
}

/// Batch issuance request.
///
/// `valid_days: None` is sent as `null`, which issues cards that never expire.
#[derive(Debug, Clone, Serialize)]
pub struct IssueRequest {
    /// Number of cards, 1 to 100.
    pub count: u32,
    /// Key prefix, 1 to 10 characters.
    pub prefix: String,
    /// Days until expiry, 1 to 365.
    pub valid_days: Option<u32>,
}

impl IssueRequest {
    /// Build an issuance request.
    #[must_use]
    pub fn new(count: u32, prefix: impl Into<String>, valid_days: Option<u32>) -> Self {
        Self {
            count,
            prefix: prefix.into(),
            valid_days,
        }
    }
}

/// Batch issuance response.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueResponse {
    /// The new keys in creation order.
    pub keys: Vec<String>,
}

/// Card listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct CardsResponse {
    /// All cards in issuance order.
    pub cards: Vec<Card>,
}

/// Token log response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokensResponse {
    /// All token records in redemption order.
    pub tokens: Vec<TokenRecord>,
}

/// Health check response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

/// API error envelope.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: String,
    pub message: String,
}
