//! Prompt records and their metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{JsonObject, Output};

/// A named unit of input text/parameters plus model configuration and
/// resulting output(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique identifier for the prompt within its document. Used to
    /// reference the prompt from other prompts and to match server copies
    /// during reconciliation.
    pub name: String,
    /// The prompt string, or a more complex input object.
    pub input: PromptInput,
    /// Metadata for the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PromptMetadata>,
    /// Execution outputs, populated by running the prompt.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<Output>,
}

impl Prompt {
    /// Create a prompt with the given name and input, no metadata, no outputs.
    pub fn new(name: impl Into<String>, input: impl Into<PromptInput>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            metadata: None,
            outputs: Vec::new(),
        }
    }

    pub fn add_output(&mut self, output: Output) {
        self.outputs.push(output);
    }

    /// The raw prompt text, when the input is (or carries) plain text.
    pub fn input_text(&self) -> Option<&str> {
        match &self.input {
            PromptInput::Text(text) => Some(text),
            PromptInput::Structured(structured) => structured.data.as_ref().and_then(Value::as_str),
        }
    }

    /// The model name this prompt is pinned to, if any.
    pub fn model_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|metadata| metadata.model.as_ref())
            .map(ModelRef::name)
    }

    /// Set or clear this prompt's model reference, creating the metadata
    /// object when needed.
    pub fn set_model(&mut self, model: Option<ModelRef>) {
        if let Some(metadata) = self.metadata.as_mut() {
            metadata.model = model;
        } else if let Some(model) = model {
            self.metadata = Some(PromptMetadata {
                model: Some(model),
                ..PromptMetadata::default()
            });
        }
    }

    /// Replace the inference settings on this prompt's model reference,
    /// promoting a bare model name to full metadata. Returns `false` (and
    /// leaves the prompt untouched) when no model is set.
    pub fn set_model_settings(&mut self, settings: JsonObject) -> bool {
        let Some(model) = self
            .metadata
            .as_mut()
            .and_then(|metadata| metadata.model.as_mut())
        else {
            return false;
        };
        *model = ModelRef::Full(ModelMetadata {
            name: model.name().to_string(),
            settings,
        });
        true
    }

    /// Replace this prompt's parameter definitions, creating the metadata
    /// object when needed.
    pub fn set_parameters(&mut self, parameters: JsonObject) {
        self.metadata
            .get_or_insert_with(PromptMetadata::default)
            .parameters = Some(parameters);
    }
}

/// Prompt input: free-form text, or a structured payload for non-text
/// inputs (attachments plus free-form data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptInput {
    Text(String),
    Structured(StructuredInput),
}

impl From<&str> for PromptInput {
    fn from(text: &str) -> Self {
        PromptInput::Text(text.to_string())
    }
}

impl From<String> for PromptInput {
    fn from(text: String) -> Self {
        PromptInput::Text(text)
    }
}

/// Structured prompt input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructuredInput {
    /// Non-text inputs (images, audio).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// Free-form data for the overall input (for example the question in a
    /// document-answering prompt whose images ride in `attachments`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Attachment carrying a non-text input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// The data representing the attachment.
    pub data: Value,
    /// MIME type of the data. Assumed `text/plain` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

/// Per-prompt metadata.
///
/// Model name/settings here override any document-level model settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PromptMetadata {
    /// Model for this prompt. A bare string is shorthand for a model name
    /// with no setting overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelRef>,
    /// Tags for this prompt. Unique, no commas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Parameter definitions accessible to this prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<JsonObject>,
    /// Pass-through keys not covered by the fields above.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Model reference: either a bare model name or full metadata with
/// inference settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelRef {
    Name(String),
    Full(ModelMetadata),
}

impl ModelRef {
    pub fn name(&self) -> &str {
        match self {
            ModelRef::Name(name) => name,
            ModelRef::Full(metadata) => &metadata.name,
        }
    }

    /// The settings carried by this reference. A bare name carries none.
    pub fn settings(&self) -> Option<&JsonObject> {
        match self {
            ModelRef::Name(_) => None,
            ModelRef::Full(metadata) => Some(&metadata.settings),
        }
    }
}

/// Model name plus the inference settings that apply to one prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// The ID of the model to use.
    pub name: String,
    /// Inference settings for this prompt.
    #[serde(default, skip_serializing_if = "JsonObject::is_empty")]
    pub settings: JsonObject,
}

impl ModelMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: JsonObject::new(),
        }
    }
}
