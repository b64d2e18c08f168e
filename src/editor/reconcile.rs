//! Reconciliation of a server-returned document with local edits.
//!
//! A run is asynchronous relative to continued editing: by the time the
//! server's authoritative document arrives, the local copy may have moved
//! on. A wholesale overwrite in either direction would drop either the
//! freshly computed outputs or the user's concurrent edits, so the merge is
//! field-by-field with local precedence:
//!
//! - server prompt as the base, every local field overwriting on direct
//!   conflict (last local write wins over a round trip that started earlier)
//! - the metadata sub-object merged the same way one level down (server
//!   metadata as base, local keys overwriting matching keys)
//! - outputs replaced wholesale from the server; they are computed, not
//!   edited, so there is nothing local to preserve
//!
//! Local and server copies are matched by prompt name. Only the prompt that
//! ran is reconciled; rows inserted locally while the run was in flight have
//! no server counterpart and are left untouched.

use tracing::debug;

use crate::schema::{Prompt, PromptDocument, PromptMetadata};

use super::state::{EditorDocument, PromptId};
use super::StateError;

/// Merge the server's copy of the prompt that ran back into local state and
/// clear its running flag.
///
/// An unknown `id` is a no-op (the row was deleted while the run was in
/// flight). A response lacking the expected prompt name is a broken
/// contract, not a recoverable condition.
pub(super) fn consolidate_run(
    mut state: EditorDocument,
    id: PromptId,
    server: &PromptDocument,
) -> Result<EditorDocument, StateError> {
    let Some(local) = state.prompts.iter_mut().find(|row| row.id == id) else {
        debug!(%id, "ignoring run completion for unknown prompt id");
        return Ok(state);
    };

    let server_prompt = server
        .prompts
        .iter()
        .find(|prompt| prompt.name == local.prompt.name)
        .ok_or_else(|| StateError::MissingServerPrompt {
            name: local.prompt.name.clone(),
        })?;

    debug!(name = %local.prompt.name, "consolidating run response");
    let mut merged = merge_prompt(&local.prompt, server_prompt);
    // Outputs are authoritative: replaced wholesale, never field-merged.
    merged.outputs = server_prompt.outputs.clone();
    local.prompt = merged;
    local.running = false;
    Ok(state)
}

/// Server copy as the base, local fields overwriting on direct conflict.
fn merge_prompt(local: &Prompt, server: &Prompt) -> Prompt {
    Prompt {
        name: local.name.clone(),
        input: local.input.clone(),
        metadata: merge_metadata(local.metadata.as_ref(), server.metadata.as_ref()),
        outputs: local.outputs.clone(),
    }
}

/// Key-by-key merge of the metadata sub-object: server as base, local
/// overwriting matching keys. Applies to the typed fields and to the
/// flattened pass-through keys alike.
fn merge_metadata(
    local: Option<&PromptMetadata>,
    server: Option<&PromptMetadata>,
) -> Option<PromptMetadata> {
    match (local, server) {
        (None, None) => None,
        (Some(local), None) => Some(local.clone()),
        (None, Some(server)) => Some(server.clone()),
        (Some(local), Some(server)) => {
            let mut extra = server.extra.clone();
            extra.extend(local.extra.clone());
            Some(PromptMetadata {
                model: local.model.clone().or_else(|| server.model.clone()),
                tags: local.tags.clone().or_else(|| server.tags.clone()),
                parameters: local.parameters.clone().or_else(|| server.parameters.clone()),
                extra,
            })
        }
    }
}
