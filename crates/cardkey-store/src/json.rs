//! JSON file storage implementation.
//!
//! This module provides the `JsonFileStore` implementation of the `Store` trait.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use cardkey_core::Document;

use crate::error::Result;
use crate::schema;
use crate::Store;

/// Stores the document as a pretty-printed JSON file.
///
/// Saves go to a temporary file in the same directory which is then renamed
/// over the target, so a reader never sees a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use the document at `path`. Nothing is touched on disk until the first load or save.
    #[must_use]
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the document file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the document; temporary files are created here.
    fn dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Serialize a document as indented JSON.
    fn serialize(document: &Document) -> Result<Vec<u8>> {
        let mut buf = serde_json::to_vec_pretty(document)?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Deserialize a document and check its schema version.
    fn deserialize(data: &[u8]) -> Result<Document> {
        let document: Document = serde_json::from_slice(data)?;
        schema::check_version(&document)?;
        Ok(document)
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<Document> {
        match fs::read(&self.path) {
            Ok(data) => Self::deserialize(&data),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let document = Document::new();
                self.save(&document)?;
                tracing::info!(path = %self.path.display(), "Initialized empty card store");
                Ok(document)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, document: &Document) -> Result<()> {
        let dir = self.dir();
        fs::create_dir_all(dir)?;

        let data = Self::serialize(document)?;
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(&data)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(
            path = %self.path.display(),
            cards = document.cards.len(),
            tokens = document.tokens.len(),
            "Card store saved"
        );

        Ok(())
    }
}
