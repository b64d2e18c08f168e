//! Shared builders for document and editor-state tests.

#![allow(dead_code)]

use promptdoc::editor::{EditorDocument, EditorPrompt};
use promptdoc::schema::{
    ExecuteResult, JsonObject, ModelMetadata, ModelRef, Output, OutputData, Prompt,
    PromptDocument, PromptMetadata,
};

/// Build a JSON object from literal pairs.
pub fn object(pairs: &[(&str, serde_json::Value)]) -> JsonObject {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// A text prompt with no metadata or outputs.
pub fn prompt(name: &str, input: &str) -> Prompt {
    Prompt::new(name, input)
}

/// A text prompt pinned to a model by name.
pub fn prompt_with_model(name: &str, input: &str, model: &str) -> Prompt {
    let mut prompt = Prompt::new(name, input);
    prompt.metadata = Some(PromptMetadata {
        model: Some(ModelRef::Name(model.to_string())),
        ..PromptMetadata::default()
    });
    prompt
}

/// A text prompt pinned to a model with settings.
pub fn prompt_with_settings(name: &str, input: &str, model: &str, settings: JsonObject) -> Prompt {
    let mut prompt = Prompt::new(name, input);
    prompt.metadata = Some(PromptMetadata {
        model: Some(ModelRef::Full(ModelMetadata {
            name: model.to_string(),
            settings,
        })),
        ..PromptMetadata::default()
    });
    prompt
}

/// A document named "test" holding the given prompts.
pub fn document(prompts: Vec<Prompt>) -> PromptDocument {
    PromptDocument {
        name: "test".to_string(),
        prompts,
        ..PromptDocument::default()
    }
}

/// An editor document over the given prompts, fresh ids, nothing running.
pub fn editor_document(prompts: Vec<Prompt>) -> EditorDocument {
    EditorDocument::from_document(document(prompts))
}

/// A plain-text execution result output.
pub fn text_result(text: &str) -> Output {
    Output::ExecuteResult(ExecuteResult {
        execution_count: Some(0),
        data: OutputData::from(text),
        mime_type: None,
        metadata: JsonObject::new(),
    })
}

/// Wrap a prompt in an editor row.
pub fn row(prompt: Prompt) -> EditorPrompt {
    EditorPrompt::new(prompt)
}
