//! Persistent storage for the raw editor text
//!
//! The document lives under one fixed key and is rewritten whole on
//! every change. Load validates the key and the content fingerprint so
//! a corrupt or foreign file surfaces as an error instead of silently
//! replacing the user's text.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::fingerprint;

/// Fixed key the editor document is stored under
pub const STORAGE_KEY: &str = "word_lab_content";

/// Failures while loading or saving the document
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("stored document has key {found:?}, expected {expected:?}")]
    WrongKey { expected: String, found: String },
    #[error("stored document fingerprint does not match its text")]
    Corrupt,
}

/// Boundary for persisting the raw text between runs
pub trait DocumentStore {
    /// Load the saved text, or None if nothing was ever saved
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Save the text, replacing any previous save
    fn save(&self, text: &str) -> Result<(), StoreError>;
}

/// On-disk document format
#[derive(Debug, Serialize, Deserialize)]
struct StoredDocument {
    key: String,
    text: String,
    fingerprint: String,
    saved_at_unix: i64,
}

/// JSON-file-backed document store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        let doc: StoredDocument = serde_json::from_str(&json)?;

        if doc.key != STORAGE_KEY {
            return Err(StoreError::WrongKey {
                expected: STORAGE_KEY.to_string(),
                found: doc.key,
            });
        }
        if doc.fingerprint != fingerprint(&doc.text) {
            return Err(StoreError::Corrupt);
        }

        Ok(Some(doc.text))
    }

    fn save(&self, text: &str) -> Result<(), StoreError> {
        let doc = StoredDocument {
            key: STORAGE_KEY.to_string(),
            text: text.to_string(),
            fingerprint: fingerprint(text),
            saved_at_unix: Utc::now().timestamp(),
        };

        let json = serde_json::to_string_pretty(&doc)?;
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(&self.path, json)?;

        debug!(
            "saved {} characters to {}",
            text.chars().count(),
            self.path.display()
        );
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
