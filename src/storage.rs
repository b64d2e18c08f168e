//! Loading and saving prompt documents.
//!
//! The on-disk format is the JSON wire shape of [`PromptDocument`]. Loading
//! validates the one structural invariant the rest of the crate relies on:
//! prompt names are unique within a document.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::schema::PromptDocument;

/// Errors that can occur when loading or saving a document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read document {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse document {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize document '{name}': {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write document {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document validation failed: {message}")]
    Validation { message: String },
}

impl PromptDocument {
    /// Loads a document from a JSON file and validates it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| StoreError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let document: PromptDocument =
            serde_json::from_str(&content).map_err(|e| StoreError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        document.validate()?;
        info!(name = %document.name, prompts = document.prompts.len(), "loaded document");
        Ok(document)
    }

    /// Saves the document as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();

        let mut content = serde_json::to_string_pretty(self).map_err(|e| StoreError::Serialize {
            name: self.name.clone(),
            source: e,
        })?;
        content.push('\n');

        fs::write(path, content).map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(name = %self.name, path = %path.display(), "saved document");
        Ok(())
    }

    /// Validates the document.
    ///
    /// Checks that prompt names are non-empty and unique; names are the
    /// join key for reconciliation, so duplicates would make merges
    /// ambiguous.
    pub fn validate(&self) -> Result<(), StoreError> {
        let mut seen = std::collections::BTreeSet::new();
        for prompt in &self.prompts {
            if prompt.name.is_empty() {
                return Err(StoreError::Validation {
                    message: "prompt with an empty name".to_string(),
                });
            }
            if !seen.insert(prompt.name.as_str()) {
                return Err(StoreError::Validation {
                    message: format!("duplicate prompt name '{}'", prompt.name),
                });
            }
        }
        Ok(())
    }
}
