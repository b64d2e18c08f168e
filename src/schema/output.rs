//! Execution outputs.
//!
//! Outputs are a tagged union on `output_type`: a successful execution
//! result or an error raised while running the prompt.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::JsonObject;

/// One output produced by executing a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "output_type", rename_all = "snake_case")]
pub enum Output {
    ExecuteResult(ExecuteResult),
    Error(ErrorOutput),
}

impl Output {
    /// Convenience constructor for an error output with an empty traceback.
    pub fn error(ename: impl Into<String>, evalue: impl Into<String>) -> Self {
        Output::Error(ErrorOutput {
            ename: ename.into(),
            evalue: evalue.into(),
            traceback: Vec::new(),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Output::Error(_))
    }

    /// The plain text carried by this output, when there is any. Error
    /// outputs and non-text payloads yield `None`.
    pub fn text(&self) -> Option<&str> {
        match self {
            Output::ExecuteResult(result) => match &result.data {
                OutputData::Text(text) => Some(text),
                OutputData::Json(value) => value.as_str(),
                OutputData::Tagged(_) => None,
            },
            Output::Error(_) => None,
        }
    }
}

/// The result of executing a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteResult {
    /// nth choice, for models that return several.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_count: Option<u64>,
    /// The result payload.
    pub data: OutputData,
    /// MIME type of the result. Assumed plain text when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Output metadata.
    #[serde(default, skip_serializing_if = "JsonObject::is_empty")]
    pub metadata: JsonObject,
}

/// An error that occurred while executing a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// The name of the error.
    pub ename: String,
    /// The value, or message, of the error.
    pub evalue: String,
    /// The error's traceback, one frame per entry.
    #[serde(default)]
    pub traceback: Vec<String>,
}

/// Output payload: a kind-tagged value, plain text, or arbitrary JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputData {
    Tagged(TaggedOutputData),
    Text(String),
    Json(Value),
}

impl From<&str> for OutputData {
    fn from(text: &str) -> Self {
        OutputData::Text(text.to_string())
    }
}

/// Output content stored as a string (or tool-call list) whose `kind` tag
/// says how to interpret it, together with the `mime_type` on the
/// surrounding [`ExecuteResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaggedOutputData {
    FileUri { value: String },
    Base64 { value: String },
    ToolCalls { value: Vec<ToolCall> },
}

/// A single tool call produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Call id. Optional in practice even where provider APIs require it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub function: FunctionCall,
    /// Always `"function"` today.
    #[serde(rename = "type")]
    pub call_type: String,
}

/// Function call data for a single call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// The name of the function to call.
    pub name: String,
    /// Arguments as model-generated JSON text. Not guaranteed to be valid
    /// JSON; validate before dispatching the call.
    pub arguments: String,
}
