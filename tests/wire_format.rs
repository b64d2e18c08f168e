//! Wire-shape checks against a realistic document, matching the JSON format
//! the server and other tooling produce.

mod common;

use common::{document, prompt};
use promptdoc::editor::EditorDocument;
use promptdoc::schema::{
    ModelRef, Output, OutputData, PromptDocument, PromptInput, SchemaVersion, TaggedOutputData,
};
use serde_json::json;

const SAMPLE: &str = r#"{
  "name": "travel planner",
  "schema_version": "latest",
  "description": "Itinerary helper",
  "metadata": {
    "default_model": "gpt-4",
    "models": { "gpt-4": { "max_tokens": 1024 } },
    "parameters": { "city": "Paris" }
  },
  "prompts": [
    {
      "name": "plan",
      "input": "Plan a weekend in {{city}}",
      "metadata": {
        "model": { "name": "gpt-4", "settings": { "temperature": 0.3 } },
        "remember_chat_context": true
      },
      "outputs": [
        {
          "output_type": "execute_result",
          "execution_count": 0,
          "data": "Day 1: Louvre",
          "metadata": {}
        }
      ]
    },
    {
      "name": "pack",
      "input": { "data": "What should I pack?" },
      "metadata": { "model": "gpt-3.5-turbo" }
    }
  ]
}"#;

#[test]
fn parses_realistic_document() {
    let doc: PromptDocument = serde_json::from_str(SAMPLE).unwrap();

    assert_eq!(doc.schema_version, SchemaVersion::Tag("latest".to_string()));
    assert_eq!(doc.metadata.default_model.as_deref(), Some("gpt-4"));
    assert_eq!(doc.prompts.len(), 2);

    // Full model metadata with settings.
    let plan = &doc.prompts[0];
    assert_eq!(plan.model_name(), Some("gpt-4"));
    let metadata = plan.metadata.as_ref().unwrap();
    assert_eq!(metadata.extra["remember_chat_context"], json!(true));

    // Bare model name parses as the shorthand variant.
    let pack = &doc.prompts[1];
    assert!(matches!(
        pack.metadata.as_ref().unwrap().model,
        Some(ModelRef::Name(_))
    ));
    assert!(matches!(pack.input, PromptInput::Structured(_)));
    assert_eq!(pack.input_text(), Some("What should I pack?"));
}

#[test]
fn output_union_is_tagged_by_output_type() {
    let doc: PromptDocument = serde_json::from_str(SAMPLE).unwrap();
    let output = &doc.prompts[0].outputs[0];
    match output {
        Output::ExecuteResult(result) => {
            assert_eq!(result.execution_count, Some(0));
            assert_eq!(result.data, OutputData::Text("Day 1: Louvre".to_string()));
        }
        Output::Error(_) => panic!("expected execute_result"),
    }
}

#[test]
fn error_output_parses() {
    let output: Output = serde_json::from_value(json!({
        "output_type": "error",
        "ename": "RateLimitError",
        "evalue": "429 from provider",
        "traceback": ["frame 1"]
    }))
    .unwrap();
    assert!(output.is_error());
}

#[test]
fn tagged_output_data_parses_by_kind() {
    let data: OutputData = serde_json::from_value(json!({
        "kind": "base64",
        "value": "aGVsbG8="
    }))
    .unwrap();
    assert!(matches!(
        data,
        OutputData::Tagged(TaggedOutputData::Base64 { .. })
    ));
}

#[test]
fn text_input_serializes_as_bare_string() {
    let doc = document(vec![prompt("plan", "hello")]);
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["prompts"][0]["input"], json!("hello"));
}

#[test]
fn roundtrip_preserves_unknown_metadata_keys() {
    let doc: PromptDocument = serde_json::from_str(SAMPLE).unwrap();
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value["prompts"][0]["metadata"]["remember_chat_context"],
        json!(true)
    );
}

#[test]
fn editor_conversion_strips_nothing_from_the_wire_document() {
    let doc: PromptDocument = serde_json::from_str(SAMPLE).unwrap();
    let editor = EditorDocument::from_document(doc.clone());
    // Ids and running flags are editor-only; the wire document is unchanged.
    assert_eq!(editor.to_document(), doc);
}
