//! Editing session
//!
//! Ties the debounced controller to its collaborators: text is
//! restored from the store when the session opens and saved on every
//! change. Clipboard and export are trait boundaries; their failures
//! come back as errors and never disturb the in-memory text.

use std::path::PathBuf;
use std::time::Duration;

use log::{debug, warn};
use thiserror::Error;

use crate::core::debounce::DebouncedAnalyzer;
use crate::core::store::{DocumentStore, StoreError};
use crate::types::{AnalysisSnapshot, TextTransform};

/// Failures from session collaborators
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("clipboard rejected the text: {0}")]
    Clipboard(String),
    #[error("export failed: {0}")]
    Export(String),
}

/// Boundary for the system clipboard
pub trait Clipboard {
    /// Place the text on the clipboard
    fn set_text(&mut self, text: &str) -> Result<(), SessionError>;
}

/// Export target formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Paged document (PDF-like)
    PagedDocument,
    /// Rasterized image
    RasterImage,
}

/// Boundary for document export
pub trait DocumentExporter {
    /// Render the text to a file and return its path
    fn export(&mut self, text: &str, format: ExportFormat) -> Result<PathBuf, SessionError>;
}

/// An editing session over one stored document
pub struct EditorSession<S: DocumentStore> {
    controller: DebouncedAnalyzer,
    store: S,
}

impl<S: DocumentStore> EditorSession<S> {
    /// Open a session, restoring any previously saved text
    pub fn open(store: S) -> Result<Self, SessionError> {
        Self::open_with_controller(store, DebouncedAnalyzer::new())
    }

    /// Open with a custom quiet interval
    pub fn open_with_quiet_interval(store: S, quiet: Duration) -> Result<Self, SessionError> {
        Self::open_with_controller(store, DebouncedAnalyzer::with_quiet_interval(quiet))
    }

    fn open_with_controller(
        store: S,
        mut controller: DebouncedAnalyzer,
    ) -> Result<Self, SessionError> {
        if let Some(saved) = store.load()? {
            debug!("restored {} characters from store", saved.chars().count());
            controller.update(saved);
        }
        Ok(Self { controller, store })
    }

    /// Replace the text. The in-memory update always happens; a failed
    /// save is reported but does not interrupt editing.
    pub fn update(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        let text = text.into();
        self.controller.update(text.clone());
        self.persist(&text)
    }

    /// Apply a transform to the current text, then persist it
    pub fn transform(&mut self, kind: TextTransform) -> Result<(), SessionError> {
        self.controller.transform(kind);
        let text = self.controller.current_text();
        self.persist(&text)
    }

    fn persist(&self, text: &str) -> Result<(), SessionError> {
        if let Err(e) = self.store.save(text) {
            warn!("save failed, editing continues: {}", e);
            return Err(e.into());
        }
        Ok(())
    }

    /// Copy the current raw text to a clipboard
    pub fn copy_to(&self, clipboard: &mut dyn Clipboard) -> Result<(), SessionError> {
        clipboard.set_text(&self.controller.current_text())
    }

    /// Export the current raw text to a file
    pub fn export_to(
        &self,
        exporter: &mut dyn DocumentExporter,
        format: ExportFormat,
    ) -> Result<PathBuf, SessionError> {
        exporter.export(&self.controller.current_text(), format)
    }

    /// The committed analysis plus the live busy flag
    pub fn current_result(&self) -> AnalysisSnapshot {
        self.controller.current_result()
    }

    /// The latest raw text
    pub fn current_text(&self) -> String {
        self.controller.current_text()
    }

    /// The underlying controller
    pub fn controller(&self) -> &DebouncedAnalyzer {
        &self.controller
    }
}

// =============================================================================
// TESTS
// =============================================================================
