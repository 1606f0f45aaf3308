//! Core modules for Word Lab

pub mod analyzer;
pub mod debounce;
pub mod session;
pub mod stopwords;
pub mod store;
pub mod syllable;
pub mod transform;

pub use analyzer::TextAnalyzer;
pub use debounce::{DebounceTimer, DebouncedAnalyzer};
pub use session::{Clipboard, DocumentExporter, EditorSession, ExportFormat, SessionError};
pub use stopwords::is_stop_word;
pub use store::{DocumentStore, JsonFileStore, StoreError, STORAGE_KEY};
pub use syllable::count_syllables;
pub use transform::apply_transform;

use sha2::{Digest, Sha256};

/// SHA-256 hex fingerprint of a text buffer
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
