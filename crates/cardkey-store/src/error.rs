//! Error types for cardkey storage.

use cardkey_core::CardError;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the document failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The document was written by a newer schema.
    #[error("unsupported document version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version found in the document.
        found: u32,
        /// Newest version this build understands.
        supported: u32,
    },
}

impl From<StoreError> for CardError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err.to_string())
    }
}
