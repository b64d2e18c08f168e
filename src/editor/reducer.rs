//! Reducer for the editor document.

use tracing::debug;

use crate::dispatch::Reducer;

use super::intent::EditorIntent;
use super::reconcile;
use super::state::{EditorDocument, EditorPrompt, PromptId};
use super::StateError;

/// Reducer for editor state transitions.
///
/// Pure function — all side effects (issuing the run request, persisting the
/// document) are handled by the caller around the dispatch call. Structural
/// edits with an unknown id return the state unchanged; the only error is the
/// reconciliation contract in [`super::reconcile`].
pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorDocument;
    type Intent = EditorIntent;
    type Error = StateError;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Result<Self::State, Self::Error> {
        match intent {
            EditorIntent::InsertPrompt { index, prompt } => {
                let index = index.min(state.prompts.len());
                state.prompts.insert(index, prompt);
                Ok(state)
            }

            EditorIntent::DeletePrompt { id } => {
                state.prompts.retain(|row| row.id != id);
                Ok(state)
            }

            EditorIntent::UpdatePromptName { id, name } => {
                Ok(with_prompt(state, id, |row| row.prompt.name = name))
            }

            EditorIntent::UpdatePromptInput { id, input } => {
                Ok(with_prompt(state, id, |row| row.prompt.input = input))
            }

            EditorIntent::UpdatePromptModel { id, model } => {
                Ok(with_prompt(state, id, |row| row.prompt.set_model(model)))
            }

            EditorIntent::UpdatePromptModelSettings { id, settings } => {
                Ok(with_prompt(state, id, |row| {
                    if !row.prompt.set_model_settings(settings) {
                        debug!(name = %row.prompt.name, "ignoring settings update for prompt with no model");
                    }
                }))
            }

            EditorIntent::UpdatePromptParameters { id, parameters } => {
                Ok(with_prompt(state, id, |row| {
                    row.prompt.set_parameters(parameters)
                }))
            }

            EditorIntent::UpdateGlobalParameters { parameters } => {
                state.metadata.parameters = Some(parameters);
                Ok(state)
            }

            EditorIntent::SetName { name } => {
                state.name = name;
                Ok(state)
            }

            EditorIntent::SetDescription { description } => {
                state.description = description;
                Ok(state)
            }

            EditorIntent::RunPromptStart { id } => {
                Ok(with_prompt(state, id, |row| row.running = true))
            }

            EditorIntent::RunPromptError { id, error } => {
                Ok(with_prompt(state, id, |row| {
                    row.running = false;
                    row.prompt.outputs.push(error);
                }))
            }

            EditorIntent::RunPromptComplete { id, document } => {
                reconcile::consolidate_run(state, id, &document)
            }
        }
    }
}

/// Apply `f` to the row with the given id; unknown ids leave the state
/// unchanged.
fn with_prompt(
    mut state: EditorDocument,
    id: PromptId,
    f: impl FnOnce(&mut EditorPrompt),
) -> EditorDocument {
    match state.prompts.iter_mut().find(|row| row.id == id) {
        Some(row) => f(row),
        None => debug!(%id, "ignoring intent for unknown prompt id"),
    }
    state
}
