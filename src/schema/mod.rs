//! Document model for prompt documents.
//!
//! Mirrors the JSON wire format: a named document holding an ordered list of
//! prompts plus document-level metadata. Unknown keys on metadata objects are
//! preserved through flattened maps rather than rejected, so documents written
//! by other tooling round-trip untouched.

mod output;
mod prompt;

pub use output::{
    ErrorOutput, ExecuteResult, FunctionCall, Output, OutputData, TaggedOutputData, ToolCall,
};
pub use prompt::{
    Attachment, ModelMetadata, ModelRef, Prompt, PromptInput, PromptMetadata, StructuredInput,
};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form JSON object, used for parameters, model settings, and
/// pass-through metadata keys.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Version marker for the document format.
///
/// Either a `{major, minor}` pair or one of the string tags `"v1"` /
/// `"latest"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaVersion {
    Numbered { major: u32, minor: u32 },
    Tag(String),
}

impl Default for SchemaVersion {
    fn default() -> Self {
        SchemaVersion::Tag("latest".to_string())
    }
}

/// Document-level metadata that applies to the entire document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Parameter definitions accessible to all prompts in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<JsonObject>,
    /// Globally defined model settings, keyed by model name. Prompts using
    /// these models inherit the settings unless they override them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<BTreeMap<String, JsonObject>>,
    /// Default model for prompts that do not specify one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
    /// Model name to parser-id mapping, for models handled by a
    /// non-default parser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_parsers: Option<BTreeMap<String, String>>,
    /// Pass-through keys not covered by the fields above.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A prompt document: ordered prompts plus document-level metadata.
///
/// Prompt order is meaningful (display and execution order). Prompt names
/// are unique within a document and act as the join key when a
/// server-returned copy is reconciled with a local one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PromptDocument {
    /// Friendly name for the document.
    pub name: String,
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Document-level metadata.
    #[serde(default)]
    pub metadata: ConfigMetadata,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// The ordered prompts that make up the document.
    #[serde(default)]
    pub prompts: Vec<Prompt>,
}
