//! Cardkey HTTP client implementation.

use reqwest::Client;
use std::time::Duration;

use crate::error::ClientError;
use crate::types::{
    ApiErrorResponse, CardsResponse, HealthResponse, IssueRequest, IssueResponse,
    SubmitTokenResponse, TokenRequest, TokensResponse, ValidateRequest, ValidateResponse,
};

/// Cardkey API client.
///
/// Provides methods for validating and redeeming cards and for issuing them.
#[derive(Debug, Clone)]
pub struct CardKeyClient {
    client: Client,
    base_url: String,
}

impl CardKeyClient {
    /// Create a new cardkey client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the cardkey service (e.g., `"http://cardkey:8000"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new cardkey client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Check whether a card key may be redeemed.
    ///
    /// An unknown, expired or used card is a successful response with
    /// `valid == false`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the input.
    pub async fn validate(&self, card_key: &str) -> Result<ValidateResponse, ClientError> {
        let url = format!("{}/api/validate", self.base_url);
        let request = ValidateRequest {
            card_key: card_key.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        self.handle_response(response).await
    }

    /// Redeem a card by submitting a token.
    ///
    /// # Errors
    ///
    /// - `ClientError::CardNotFound` if the key is unknown.
    /// - `ClientError::CardAlreadyUsed` if the card was already redeemed.
    /// - Other variants if the request fails.
    pub async fn submit_token(
        &self,
        card_key: &str,
        token: &str,
    ) -> Result<SubmitTokenResponse, ClientError> {
        let url = format!("{}/api/tokens", self.base_url);
        let request = TokenRequest {
            card_key: card_key.to_string(),
            token: token.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let result = self.handle_response(response).await;

        if let Err(e) = &result {
            tracing::debug!(card_key = %card_key, error = %e, "Token submission failed");
        }

        result
    }

    /// Issue a batch of cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the parameters are out of range.
    pub async fn issue_cards(&self, request: &IssueRequest) -> Result<IssueResponse, ClientError> {
        let url = format!("{}/api/cards", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;

        self.handle_response(response).await
    }

    /// List every card.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_cards(&self) -> Result<CardsResponse, ClientError> {
        let url = format!("{}/api/cards", self.base_url);

        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// List the token log.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_tokens(&self) -> Result<TokensResponse, ClientError> {
        let url = format!("{}/api/tokens", self.base_url);

        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Probe service liveness.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);

        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse error response
        let error_body: Result<ApiErrorResponse, _> = response.json().await;

        match error_body {
            Ok(api_error) => {
                let code = api_error.error.code.as_str();
                let message = api_error.error.message;

                // Map specific error codes to typed errors
                match code {
                    "card_not_found" => Err(ClientError::CardNotFound {
                        key: strip_label(&message, "card not found: "),
                    }),
                    "card_already_used" => Err(ClientError::CardAlreadyUsed {
                        key: strip_label(&message, "card already used: "),
                    }),
                    _ => Err(ClientError::Api {
                        code: code.to_string(),
                        message,
                        status: status.as_u16(),
                    }),
                }
            }
            Err(_) => Err(ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            }),
        }
    }
}

/// The card key out of a server message such as `"card not found: VIP-..."`.
fn strip_label(message: &str, label: &str) -> String {
    message.strip_prefix(label).unwrap_or(message).to_string()
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}
