//! Token redemption handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use cardkey_core::{TokenRecord, MIN_CARD_KEY_LEN, MIN_TOKEN_LEN};

use super::require_min_len;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Token submission request.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    /// The card key being redeemed.
    #[serde(rename = "cardKey")]
    pub card_key: String,
    /// The token to record.
    pub token: String,
}

/// Token submission response.
#[derive(Debug, Serialize)]
pub struct SubmitTokenResponse {
    /// Confirmation message.
    pub message: String,
    /// The recorded token.
    pub record: TokenRecord,
}

/// Redeem a card by submitting a token.
pub async fn submit_token(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<TokenRequest>,
) -> Result<Json<SubmitTokenResponse>, ApiError> {
    let key = require_min_len("cardKey", &body.card_key, MIN_CARD_KEY_LEN)?;
    let token = require_min_len("token", &body.token, MIN_TOKEN_LEN)?;

    let record = state.cards.store_token(key, token)?;

    Ok(Json(SubmitTokenResponse {
        message: "Token recorded".to_string(),
        record,
    }))
}

/// List tokens response.
#[derive(Debug, Serialize)]
pub struct TokensResponse {
    /// All token records in redemption order.
    pub tokens: Vec<TokenRecord>,
}

/// List the token log.
pub async fn list_tokens(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TokensResponse>, ApiError> {
    let tokens = state.cards.list_tokens()?;

    Ok(Json(TokensResponse { tokens }))
}
