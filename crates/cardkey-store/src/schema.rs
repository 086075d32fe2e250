//! Document schema definitions.
//!
//! The persisted document is a JSON object with top-level `version`, `cards`
//! and `tokens` keys. Timestamps are naive UTC ISO-8601 strings.

use cardkey_core::{Document, SCHEMA_VERSION};

use crate::error::{Result, StoreError};

/// Default location of the document, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "data/store.json";

/// Reject documents written by a newer schema.
///
/// # Errors
///
/// Returns `StoreError::UnsupportedVersion` if the document's version is
/// newer than [`SCHEMA_VERSION`].
pub fn check_version(document: &Document) -> Result<()> {
    if document.version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: document.version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_version_is_accepted() {
        assert!(check_version(&Document::new()).is_ok());
    }

    #[test]
    fn newer_version_is_rejected() {
        let document = Document {
            version: SCHEMA_VERSION + 1,
            ..Document::new()
        };
        assert!(matches!(
            check_version(&document),
            Err(StoreError::UnsupportedVersion { .. })
        ));
    }
}
