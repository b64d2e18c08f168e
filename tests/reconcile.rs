//! Reconciliation through the reducer: a run completes against a document
//! the user kept editing while the request was in flight.

mod common;

use common::{document, editor_document, object, prompt, prompt_with_model, prompt_with_settings, row, text_result};
use promptdoc::dispatch::Reducer;
use promptdoc::editor::{EditorIntent, EditorReducer, StateError};
use promptdoc::schema::PromptInput;
use serde_json::json;

#[test]
fn run_complete_clears_running_and_installs_outputs() {
    let state = editor_document(vec![prompt("greet", "say hi")]);
    let id = state.prompts[0].id;
    let state = EditorReducer::reduce(state, EditorIntent::RunPromptStart { id }).unwrap();
    assert!(state.prompts[0].running);

    let mut server_prompt = prompt("greet", "say hi");
    server_prompt.add_output(text_result("hello!"));
    let server = document(vec![server_prompt]);

    let state = EditorReducer::reduce(
        state,
        EditorIntent::RunPromptComplete {
            id,
            document: server,
        },
    )
    .unwrap();

    assert!(!state.prompts[0].running);
    assert_eq!(state.prompts[0].prompt.outputs, vec![text_result("hello!")]);
}

#[test]
fn concurrent_input_edit_survives_run_complete() {
    let state = editor_document(vec![prompt("greet", "say hi")]);
    let id = state.prompts[0].id;
    let state = EditorReducer::reduce(state, EditorIntent::RunPromptStart { id }).unwrap();

    // User keeps typing while the request is in flight.
    let state = EditorReducer::reduce(
        state,
        EditorIntent::UpdatePromptInput {
            id,
            input: PromptInput::from("say hi in French"),
        },
    )
    .unwrap();

    // Server computed against the old input.
    let mut server_prompt = prompt("greet", "say hi");
    server_prompt.add_output(text_result("hello!"));
    let server = document(vec![server_prompt]);

    let state = EditorReducer::reduce(
        state,
        EditorIntent::RunPromptComplete {
            id,
            document: server,
        },
    )
    .unwrap();

    // Last local write wins; the server's outputs still land.
    assert_eq!(state.prompts[0].prompt.input_text(), Some("say hi in French"));
    assert_eq!(state.prompts[0].prompt.outputs, vec![text_result("hello!")]);
}

#[test]
fn concurrent_model_change_wins_over_server_copy() {
    let state = editor_document(vec![prompt_with_model("greet", "say hi", "gpt-4")]);
    let id = state.prompts[0].id;
    let state = EditorReducer::reduce(state, EditorIntent::RunPromptStart { id }).unwrap();

    let state = EditorReducer::reduce(
        state,
        EditorIntent::UpdatePromptModelSettings {
            id,
            settings: object(&[("temperature", json!(0.9))]),
        },
    )
    .unwrap();

    let mut server_prompt =
        prompt_with_settings("greet", "say hi", "gpt-4", object(&[("temperature", json!(0.1))]));
    server_prompt.add_output(text_result("hello!"));
    let server = document(vec![server_prompt]);

    let state = EditorReducer::reduce(
        state,
        EditorIntent::RunPromptComplete {
            id,
            document: server,
        },
    )
    .unwrap();

    let metadata = state.prompts[0].prompt.metadata.as_ref().unwrap();
    let settings = metadata.model.as_ref().unwrap().settings().unwrap();
    assert_eq!(settings["temperature"], json!(0.9));
}

#[test]
fn server_added_metadata_fills_local_gaps() {
    let state = editor_document(vec![prompt("greet", "say hi")]);
    let id = state.prompts[0].id;

    // Server attached a model the client never set.
    let mut server_prompt = prompt_with_model("greet", "say hi", "gpt-4");
    server_prompt.add_output(text_result("hello!"));
    let server = document(vec![server_prompt]);

    let state = EditorReducer::reduce(
        state,
        EditorIntent::RunPromptComplete {
            id,
            document: server,
        },
    )
    .unwrap();

    assert_eq!(state.prompts[0].prompt.model_name(), Some("gpt-4"));
}

#[test]
fn prompt_inserted_during_run_is_preserved() {
    let state = editor_document(vec![prompt("greet", "say hi")]);
    let id = state.prompts[0].id;
    let state = EditorReducer::reduce(state, EditorIntent::RunPromptStart { id }).unwrap();

    // New row added while the run is in flight; the server knows nothing
    // about it.
    let state = EditorReducer::reduce(
        state,
        EditorIntent::InsertPrompt {
            index: 1,
            prompt: row(prompt("farewell", "say bye")),
        },
    )
    .unwrap();

    let mut server_prompt = prompt("greet", "say hi");
    server_prompt.add_output(text_result("hello!"));
    let server = document(vec![server_prompt]);

    let state = EditorReducer::reduce(
        state,
        EditorIntent::RunPromptComplete {
            id,
            document: server,
        },
    )
    .unwrap();

    assert_eq!(state.prompts.len(), 2);
    assert_eq!(state.prompts[1].prompt.name, "farewell");
    assert!(state.prompts[1].prompt.outputs.is_empty());
}

#[test]
fn run_complete_replaces_stale_outputs_wholesale() {
    let mut stale = prompt("greet", "say hi");
    stale.add_output(text_result("old answer"));
    stale.add_output(text_result("older answer"));
    let state = editor_document(vec![stale]);
    let id = state.prompts[0].id;

    let mut server_prompt = prompt("greet", "say hi");
    server_prompt.add_output(text_result("fresh answer"));
    let server = document(vec![server_prompt]);

    let state = EditorReducer::reduce(
        state,
        EditorIntent::RunPromptComplete {
            id,
            document: server,
        },
    )
    .unwrap();

    assert_eq!(state.prompts[0].prompt.outputs, vec![text_result("fresh answer")]);
}

#[test]
fn missing_server_prompt_is_contract_violation() {
    let state = editor_document(vec![prompt("greet", "say hi")]);
    let id = state.prompts[0].id;

    // Response names a different prompt entirely.
    let server = document(vec![prompt("other", "unrelated")]);

    let err = EditorReducer::reduce(
        state,
        EditorIntent::RunPromptComplete {
            id,
            document: server,
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        StateError::MissingServerPrompt {
            name: "greet".to_string()
        }
    );
}

#[test]
fn run_complete_for_deleted_row_is_noop() {
    let state = editor_document(vec![prompt("greet", "say hi")]);
    let id = state.prompts[0].id;
    let state = EditorReducer::reduce(state, EditorIntent::RunPromptStart { id }).unwrap();
    let state = EditorReducer::reduce(state, EditorIntent::DeletePrompt { id }).unwrap();

    let mut server_prompt = prompt("greet", "say hi");
    server_prompt.add_output(text_result("hello!"));
    let server = document(vec![server_prompt]);

    let next = EditorReducer::reduce(
        state.clone(),
        EditorIntent::RunPromptComplete {
            id,
            document: server,
        },
    )
    .unwrap();
    assert_eq!(next, state);
}
