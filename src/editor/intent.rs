//! Intents dispatched against the editor document.

use crate::dispatch::Intent;
use crate::schema::{JsonObject, ModelRef, Output, PromptDocument, PromptInput};

use super::state::{EditorPrompt, PromptId};

/// User edits and run-lifecycle events.
///
/// Structural edits key rows by [`PromptId`]; an unknown id is a no-op, so
/// a stale intent (say, fired against a row deleted a frame earlier) cannot
/// corrupt state.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Insert a row at `index`, clamped to the sequence length.
    InsertPrompt { index: usize, prompt: EditorPrompt },
    /// Remove the row with the given id.
    DeletePrompt { id: PromptId },
    /// Rename the row's prompt. The id is unchanged.
    UpdatePromptName { id: PromptId, name: String },
    /// Replace the row's input payload.
    UpdatePromptInput { id: PromptId, input: PromptInput },
    /// Set or clear the row's model reference.
    UpdatePromptModel {
        id: PromptId,
        model: Option<ModelRef>,
    },
    /// Replace the inference settings on the row's model reference. A row
    /// with no model set is left untouched.
    UpdatePromptModelSettings { id: PromptId, settings: JsonObject },
    /// Replace the row's parameter definitions.
    UpdatePromptParameters { id: PromptId, parameters: JsonObject },
    /// Replace the document-global parameter definitions.
    UpdateGlobalParameters { parameters: JsonObject },
    /// Rename the document.
    SetName { name: String },
    /// Replace the document description.
    SetDescription { description: String },
    /// A run was issued for the row: mark it executing.
    RunPromptStart { id: PromptId },
    /// A run failed before producing a document: record the error output
    /// and clear the running flag.
    RunPromptError { id: PromptId, error: Output },
    /// A run finished: reconcile the server-returned authoritative
    /// document into local state and clear the running flag.
    RunPromptComplete {
        id: PromptId,
        document: PromptDocument,
    },
}

impl Intent for EditorIntent {}
