//! Editor-held document state.

use std::fmt;

use uuid::Uuid;

use crate::dispatch::State;
use crate::schema::{ConfigMetadata, Prompt, PromptDocument, SchemaVersion};

/// UI-only identifier for a prompt row.
///
/// Distinct from the prompt's display name: the name is user-editable and is
/// the join key against server responses, while the id stays stable across
/// renames so in-flight UI references never dangle. Never sent to or derived
/// from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromptId(Uuid);

impl PromptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PromptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One prompt row as the editor holds it: the wire-format prompt plus
/// UI-only bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorPrompt {
    pub id: PromptId,
    pub prompt: Prompt,
    /// Transient: true while an execution round trip is in flight.
    pub running: bool,
}

impl EditorPrompt {
    /// Wrap a prompt in a fresh row: new id, not running.
    pub fn new(prompt: Prompt) -> Self {
        Self {
            id: PromptId::new(),
            prompt,
            running: false,
        }
    }
}

/// The locally-held document: wire-format document fields plus per-row
/// editor bookkeeping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorDocument {
    pub name: String,
    pub description: String,
    pub schema_version: SchemaVersion,
    pub metadata: ConfigMetadata,
    pub prompts: Vec<EditorPrompt>,
}

impl State for EditorDocument {}

impl EditorDocument {
    /// Take a wire-format document into the editor, assigning fresh ids.
    pub fn from_document(document: PromptDocument) -> Self {
        Self {
            name: document.name,
            description: document.description,
            schema_version: document.schema_version,
            metadata: document.metadata,
            prompts: document.prompts.into_iter().map(EditorPrompt::new).collect(),
        }
    }

    /// The wire-format document: ids and running flags stripped.
    pub fn to_document(&self) -> PromptDocument {
        PromptDocument {
            name: self.name.clone(),
            description: self.description.clone(),
            schema_version: self.schema_version.clone(),
            metadata: self.metadata.clone(),
            prompts: self.prompts.iter().map(|row| row.prompt.clone()).collect(),
        }
    }

    /// Look up a row by id.
    pub fn prompt(&self, id: PromptId) -> Option<&EditorPrompt> {
        self.prompts.iter().find(|row| row.id == id)
    }
}
