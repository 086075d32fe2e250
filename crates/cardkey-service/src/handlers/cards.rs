//! Card validation, issuance and listing handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use cardkey_core::{
    Card, InvalidReason, IssueParams, Validation, DEFAULT_PREFIX, DEFAULT_VALID_DAYS,
    MAX_ISSUE_COUNT, MAX_PREFIX_LEN, MAX_VALID_DAYS, MIN_CARD_KEY_LEN,
};

use super::require_min_len;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Validate request.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    /// The card key entered by the user.
    #[serde(rename = "cardKey")]
    pub card_key: String,
}

/// Validate response.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    /// Whether the card may be redeemed.
    pub valid: bool,
    /// The card, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Machine-readable rejection reason, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<InvalidReason>,
    /// Human-readable rejection reason, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Validation> for ValidateResponse {
    fn from(outcome: Validation) -> Self {
        match outcome {
            Validation::Valid { card } => Self {
                valid: true,
                card: Some(card),
                reason: None,
                message: None,
            },
            Validation::Invalid { reason } => Self {
                valid: false,
                card: None,
                reason: Some(reason),
                message: Some(reason.message().to_string()),
            },
        }
    }
}

/// Check whether a card key may be redeemed.
pub async fn validate_card(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<ValidateRequest>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let key = require_min_len("cardKey", &body.card_key, MIN_CARD_KEY_LEN)?;

    let outcome = state.cards.validate_card(key)?;

    Ok(Json(ValidateResponse::from(outcome)))
}

fn default_count() -> i64 {
    1
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

#[allow(clippy::unnecessary_wraps)] // serde default for an Option field
fn default_valid_days() -> Option<i64> {
    Some(i64::from(DEFAULT_VALID_DAYS))
}

/// Issue request. Every field has a default; `valid_days: null` issues cards that never expire.
#[derive(Debug, Deserialize)]
pub struct IssueRequest {
    /// Number of cards, 1 to 100.
    #[serde(default = "default_count")]
    pub count: i64,
    /// Key prefix, 1 to 10 characters.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Days until expiry, 1 to 365, or null.
    #[serde(default = "default_valid_days")]
    pub valid_days: Option<i64>,
}

impl IssueRequest {
    /// Check field ranges and convert into issuance parameters.
    fn into_params(self) -> Result<IssueParams, ApiError> {
        let count = usize::try_from(self.count)
            .ok()
            .filter(|count| (1..=MAX_ISSUE_COUNT).contains(count))
            .ok_or_else(|| {
                ApiError::Unprocessable(format!("count must be between 1 and {MAX_ISSUE_COUNT}"))
            })?;

        let prefix_len = self.prefix.chars().count();
        if !(1..=MAX_PREFIX_LEN).contains(&prefix_len) {
            return Err(ApiError::Unprocessable(format!(
                "prefix must be 1 to {MAX_PREFIX_LEN} characters"
            )));
        }

        let valid_days = self
            .valid_days
            .map(|days| {
                u32::try_from(days)
                    .ok()
                    .filter(|days| (1..=MAX_VALID_DAYS).contains(days))
                    .ok_or_else(|| {
                        ApiError::Unprocessable(format!(
                            "valid_days must be between 1 and {MAX_VALID_DAYS}"
                        ))
                    })
            })
            .transpose()?;

        Ok(IssueParams::new(count, self.prefix, valid_days))
    }
}

/// Issue response.
#[derive(Debug, Serialize)]
pub struct IssueResponse {
    /// The new keys in creation order.
    pub keys: Vec<String>,
}

/// Issue a batch of cards.
pub async fn issue_cards(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<IssueRequest>,
) -> Result<Json<IssueResponse>, ApiError> {
    let params = body.into_params()?;

    let keys = state.cards.issue_cards(&params)?;

    Ok(Json(IssueResponse { keys }))
}

/// List cards response.
#[derive(Debug, Serialize)]
pub struct CardsResponse {
    /// All cards in issuance order.
    pub cards: Vec<Card>,
}

/// List every card, used and expired ones included.
pub async fn list_cards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CardsResponse>, ApiError> {
    let cards = state.cards.list_cards()?;

    Ok(Json(CardsResponse { cards }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(count: i64, prefix: &str, valid_days: Option<i64>) -> IssueRequest {
        IssueRequest {
            count,
            prefix: prefix.to_string(),
            valid_days,
        }
    }

    #[test]
    fn defaults_apply_to_empty_body() {
        let body: IssueRequest = serde_json::from_str("{}").unwrap();
        let params = body.into_params().unwrap();
        assert_eq!(params.count, 1);
        assert_eq!(params.prefix, "VIP");
        assert_eq!(params.valid_days, Some(30));
    }

    #[test]
    fn explicit_null_means_no_expiry() {
        let body: IssueRequest = serde_json::from_str(r#"{"valid_days": null}"#).unwrap();
        assert_eq!(body.into_params().unwrap().valid_days, None);
    }

    #[test]
    fn ranges_are_enforced() {
        assert!(request(0, "VIP", None).into_params().is_err());
        assert!(request(-3, "VIP", None).into_params().is_err());
        assert!(request(101, "VIP", None).into_params().is_err());
        assert!(request(1, "", None).into_params().is_err());
        assert!(request(1, "ABCDEFGHIJK", None).into_params().is_err());
        assert!(request(1, "VIP", Some(0)).into_params().is_err());
        assert!(request(1, "VIP", Some(366)).into_params().is_err());
        assert!(request(100, "ABCDEFGHIJ", Some(365)).into_params().is_ok());
    }

    #[test]
    fn invalid_outcome_carries_reason_and_message() {
        let response = ValidateResponse::from(Validation::Invalid {
            reason: InvalidReason::Expired,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["reason"], "expired");
        assert!(json.get("card").is_none());
        assert!(json["message"].is_string());
    }
}
