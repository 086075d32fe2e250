//! Client error types.

/// Errors that can occur when using the cardkey client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("API error: {code} - {message}")]
    Api {
        /// Error code.
        code: String,
        /// Error message.
        message: String,
        /// HTTP status code.
        status: u16,
    },

    /// Token submitted for an unknown card key.
    #[error("card not found: {key}")]
    CardNotFound {
        /// The card key.
        key: String,
    },

    /// Token submitted for a card that was already redeemed.
    #[error("card already used: {key}")]
    CardAlreadyUsed {
        /// The card key.
        key: String,
    },
}
