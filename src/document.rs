//! Name-keyed operations on [`PromptDocument`].
//!
//! Prompt names are the stable keys at this layer; an unknown name is a
//! [`DocumentError`], matching the document format's contract that names are
//! unique and resolvable. (The editor layer in [`crate::editor`] keys by
//! UI-only ids instead and treats unknown ids as no-ops.)

use serde_json::Value;
use thiserror::Error;

use crate::schema::{JsonObject, ModelRef, Output, Prompt, PromptDocument, PromptMetadata};

/// Errors from name-keyed document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("prompt '{name}' not found in document")]
    PromptNotFound { name: String },

    #[error("prompt '{name}' already exists; use update_prompt()")]
    DuplicatePrompt { name: String },

    #[error("model '{name}' already exists in document metadata; use update helpers")]
    DuplicateModel { name: String },

    #[error("model '{name}' does not exist in document metadata")]
    ModelNotFound { name: String },

    #[error("prompt '{prompt}' specifies no model and the document has no default model")]
    NoModel { prompt: String },

    #[error("prompt '{prompt}' has no model set; set a model before updating its settings")]
    ModelNotSet { prompt: String },

    #[error("parameter '{name}' does not exist in {scope}")]
    ParameterNotFound { name: String, scope: String },

    #[error("metadata key '{key}' does not exist in {scope}")]
    MetadataNotFound { key: String, scope: String },
}

impl PromptDocument {
    fn position(&self, name: &str) -> Option<usize> {
        self.prompts.iter().position(|prompt| prompt.name == name)
    }

    pub fn has_prompt(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Look up a prompt by name.
    pub fn prompt(&self, name: &str) -> Result<&Prompt, DocumentError> {
        self.prompts
            .iter()
            .find(|prompt| prompt.name == name)
            .ok_or_else(|| DocumentError::PromptNotFound {
                name: name.to_string(),
            })
    }

    pub fn prompt_mut(&mut self, name: &str) -> Result<&mut Prompt, DocumentError> {
        self.prompts
            .iter_mut()
            .find(|prompt| prompt.name == name)
            .ok_or_else(|| DocumentError::PromptNotFound {
                name: name.to_string(),
            })
    }

    /// Add a prompt, appending or inserting at `index` (clamped to the
    /// current length). A duplicate name is an error.
    pub fn add_prompt(
        &mut self,
        prompt: Prompt,
        index: Option<usize>,
    ) -> Result<(), DocumentError> {
        if self.has_prompt(&prompt.name) {
            return Err(DocumentError::DuplicatePrompt { name: prompt.name });
        }
        let index = index.unwrap_or(self.prompts.len()).min(self.prompts.len());
        self.prompts.insert(index, prompt);
        Ok(())
    }

    /// Replace the prompt named `name` wholesale, keeping its position.
    ///
    /// The replacement may carry a different name; the prompt is keyed by
    /// the new name afterwards.
    pub fn update_prompt(&mut self, name: &str, prompt: Prompt) -> Result<(), DocumentError> {
        let index = self
            .position(name)
            .ok_or_else(|| DocumentError::PromptNotFound {
                name: name.to_string(),
            })?;
        self.prompts[index] = prompt;
        Ok(())
    }

    /// Remove the prompt named `name`, returning the removed record.
    pub fn delete_prompt(&mut self, name: &str) -> Result<Prompt, DocumentError> {
        let index = self
            .position(name)
            .ok_or_else(|| DocumentError::PromptNotFound {
                name: name.to_string(),
            })?;
        Ok(self.prompts.remove(index))
    }

    // -- Models ---------------------------------------------------------------

    /// Resolve the model name for a prompt: its own model reference if set,
    /// otherwise the document default.
    pub fn model_name_for(&self, prompt_name: &str) -> Result<&str, DocumentError> {
        let prompt = self.prompt(prompt_name)?;
        if let Some(name) = prompt.model_name() {
            return Ok(name);
        }
        self.metadata
            .default_model
            .as_deref()
            .ok_or_else(|| DocumentError::NoModel {
                prompt: prompt_name.to_string(),
            })
    }

    pub fn default_model(&self) -> Option<&str> {
        self.metadata.default_model.as_deref()
    }

    /// Set the document default model. `None` clears it.
    pub fn set_default_model(&mut self, model: Option<String>) {
        self.metadata.default_model = model;
    }

    /// Register document-level settings for a model. The model must not
    /// already be registered.
    pub fn add_model(
        &mut self,
        name: impl Into<String>,
        settings: JsonObject,
    ) -> Result<(), DocumentError> {
        let name = name.into();
        let models = self.metadata.models.get_or_insert_with(Default::default);
        if models.contains_key(&name) {
            return Err(DocumentError::DuplicateModel { name });
        }
        models.insert(name, settings);
        Ok(())
    }

    /// Remove document-level settings for a model.
    pub fn delete_model(&mut self, name: &str) -> Result<(), DocumentError> {
        let removed = self
            .metadata
            .models
            .as_mut()
            .and_then(|models| models.remove(name));
        if removed.is_none() {
            return Err(DocumentError::ModelNotFound {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Document-level settings for a model, if registered.
    pub fn global_model_settings(&self, model_name: &str) -> Option<&JsonObject> {
        self.metadata
            .models
            .as_ref()
            .and_then(|models| models.get(model_name))
    }

    /// Map a model name to a parser id. `None` removes the mapping without
    /// materializing an empty map.
    pub fn set_model_parser(&mut self, model_name: &str, parser_id: Option<String>) {
        match parser_id {
            Some(id) => {
                self.metadata
                    .model_parsers
                    .get_or_insert_with(Default::default)
                    .insert(model_name.to_string(), id);
            }
            None => {
                if let Some(parsers) = self.metadata.model_parsers.as_mut() {
                    parsers.remove(model_name);
                }
            }
        }
    }

    /// Set or clear a prompt's model reference.
    pub fn set_prompt_model(
        &mut self,
        prompt_name: &str,
        model: Option<ModelRef>,
    ) -> Result<(), DocumentError> {
        self.prompt_mut(prompt_name)?.set_model(model);
        Ok(())
    }

    /// Replace the inference settings on a prompt's model reference,
    /// promoting a bare model name to full metadata.
    pub fn set_prompt_model_settings(
        &mut self,
        prompt_name: &str,
        settings: JsonObject,
    ) -> Result<(), DocumentError> {
        if !self.prompt_mut(prompt_name)?.set_model_settings(settings) {
            return Err(DocumentError::ModelNotSet {
                prompt: prompt_name.to_string(),
            });
        }
        Ok(())
    }

    // -- Parameters -----------------------------------------------------------

    pub fn global_parameters(&self) -> Option<&JsonObject> {
        self.metadata.parameters.as_ref()
    }

    /// Parameters visible to a prompt: its own definitions when present,
    /// falling back to the document-global definitions. With no prompt
    /// name, the global definitions.
    pub fn parameters_for(
        &self,
        prompt_name: Option<&str>,
    ) -> Result<Option<&JsonObject>, DocumentError> {
        let Some(name) = prompt_name else {
            return Ok(self.global_parameters());
        };
        let prompt = self.prompt(name)?;
        let own = prompt
            .metadata
            .as_ref()
            .and_then(|metadata| metadata.parameters.as_ref())
            .filter(|parameters| !parameters.is_empty());
        Ok(own.or_else(|| self.global_parameters()))
    }

    /// Set one parameter at prompt scope (when `prompt_name` is given) or
    /// document scope, creating the containing objects as needed.
    pub fn set_parameter(
        &mut self,
        name: impl Into<String>,
        value: Value,
        prompt_name: Option<&str>,
    ) -> Result<(), DocumentError> {
        self.scoped_parameters_mut(prompt_name)?
            .insert(name.into(), value);
        Ok(())
    }

    /// Replace the entire parameter object at prompt or document scope.
    pub fn set_parameters(
        &mut self,
        parameters: JsonObject,
        prompt_name: Option<&str>,
    ) -> Result<(), DocumentError> {
        *self.scoped_parameters_mut(prompt_name)? = parameters;
        Ok(())
    }

    /// Remove one parameter at prompt or document scope. Missing
    /// parameters are an error so typos surface; the error path leaves the
    /// document untouched (no empty parameter object is materialized).
    pub fn delete_parameter(
        &mut self,
        name: &str,
        prompt_name: Option<&str>,
    ) -> Result<(), DocumentError> {
        let scope = match prompt_name {
            Some(prompt) => format!("prompt '{prompt}'"),
            None => "document metadata".to_string(),
        };
        let removed = self
            .existing_parameters_mut(prompt_name)?
            .and_then(|parameters| parameters.remove(name));
        if removed.is_none() {
            return Err(DocumentError::ParameterNotFound {
                name: name.to_string(),
                scope,
            });
        }
        Ok(())
    }

    /// Writable parameter object at prompt or document scope, creating the
    /// containing objects as needed. Only for write paths that will insert.
    fn scoped_parameters_mut(
        &mut self,
        prompt_name: Option<&str>,
    ) -> Result<&mut JsonObject, DocumentError> {
        match prompt_name {
            Some(name) => {
                let prompt = self.prompt_mut(name)?;
                let metadata = prompt.metadata.get_or_insert_with(PromptMetadata::default);
                Ok(metadata.parameters.get_or_insert_with(JsonObject::new))
            }
            None => Ok(self.metadata.parameters.get_or_insert_with(JsonObject::new)),
        }
    }

    /// The parameter object at prompt or document scope, if one exists.
    /// Never materializes missing containers.
    fn existing_parameters_mut(
        &mut self,
        prompt_name: Option<&str>,
    ) -> Result<Option<&mut JsonObject>, DocumentError> {
        match prompt_name {
            Some(name) => Ok(self
                .prompt_mut(name)?
                .metadata
                .as_mut()
                .and_then(|metadata| metadata.parameters.as_mut())),
            None => Ok(self.metadata.parameters.as_mut()),
        }
    }

    // -- Free-form metadata ---------------------------------------------------

    /// Set a free-form metadata property at prompt scope (when
    /// `prompt_name` is given) or document scope. Keys land in the
    /// pass-through `extra` map alongside the typed fields.
    pub fn set_metadata(
        &mut self,
        key: impl Into<String>,
        value: Value,
        prompt_name: Option<&str>,
    ) -> Result<(), DocumentError> {
        match prompt_name {
            Some(name) => {
                self.prompt_mut(name)?
                    .metadata
                    .get_or_insert_with(PromptMetadata::default)
                    .extra
                    .insert(key.into(), value);
            }
            None => {
                self.metadata.extra.insert(key.into(), value);
            }
        }
        Ok(())
    }

    /// Look up a free-form metadata property at prompt or document scope.
    pub fn metadata_value(
        &self,
        key: &str,
        prompt_name: Option<&str>,
    ) -> Result<Option<&Value>, DocumentError> {
        match prompt_name {
            Some(name) => Ok(self
                .prompt(name)?
                .metadata
                .as_ref()
                .and_then(|metadata| metadata.extra.get(key))),
            None => Ok(self.metadata.extra.get(key)),
        }
    }

    /// Remove a free-form metadata property. A missing key is an error;
    /// the error path leaves the document untouched.
    pub fn delete_metadata(
        &mut self,
        key: &str,
        prompt_name: Option<&str>,
    ) -> Result<(), DocumentError> {
        let scope = match prompt_name {
            Some(prompt) => format!("prompt '{prompt}'"),
            None => "document metadata".to_string(),
        };
        let removed = match prompt_name {
            Some(name) => self
                .prompt_mut(name)?
                .metadata
                .as_mut()
                .and_then(|metadata| metadata.extra.remove(key)),
            None => self.metadata.extra.remove(key),
        };
        if removed.is_none() {
            return Err(DocumentError::MetadataNotFound {
                key: key.to_string(),
                scope,
            });
        }
        Ok(())
    }

    // -- Outputs --------------------------------------------------------------

    /// Append an output to a prompt, or replace the whole list when
    /// `overwrite` is set.
    pub fn add_output(
        &mut self,
        prompt_name: &str,
        output: Output,
        overwrite: bool,
    ) -> Result<(), DocumentError> {
        let prompt = self.prompt_mut(prompt_name)?;
        if overwrite {
            prompt.outputs = vec![output];
        } else {
            prompt.outputs.push(output);
        }
        Ok(())
    }

    /// Clear a prompt's outputs, returning the removed list.
    pub fn delete_outputs(&mut self, prompt_name: &str) -> Result<Vec<Output>, DocumentError> {
        let prompt = self.prompt_mut(prompt_name)?;
        Ok(std::mem::take(&mut prompt.outputs))
    }

    /// The most recent output for a prompt, if it has run.
    pub fn latest_output(&self, prompt_name: &str) -> Result<Option<&Output>, DocumentError> {
        Ok(self.prompt(prompt_name)?.outputs.last())
    }
}
