//! API error types and responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use cardkey_core::CardError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request - rejected by a business rule.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Request fields outside their allowed shape or range.
    #[error("unprocessable request: {0}")]
    Unprocessable(String),

    /// Request body larger than the configured limit.
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// Token submitted for an unknown card key.
    #[error("card not found: {0}")]
    CardNotFound(String),

    /// Token submitted for a card that was already redeemed.
    #[error("card already used: {0}")]
    CardAlreadyUsed(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            Self::Unprocessable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "unprocessable",
                msg.clone(),
            ),
            Self::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "payload_too_large",
                msg.clone(),
            ),
            Self::CardNotFound(_) => (
                StatusCode::BAD_REQUEST,
                "card_not_found",
                self.to_string(),
            ),
            Self::CardAlreadyUsed(_) => (
                StatusCode::BAD_REQUEST,
                "card_already_used",
                self.to_string(),
            ),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<CardError> for ApiError {
    fn from(err: CardError) -> Self {
        match err {
            CardError::InvalidArgument(msg) => Self::BadRequest(msg),
            CardError::NotFound { key } => Self::CardNotFound(key),
            CardError::AlreadyUsed { key } => Self::CardAlreadyUsed(key),
            CardError::Storage(msg) => Self::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::Unprocessable(rejection.body_text())
        }
    }
}
