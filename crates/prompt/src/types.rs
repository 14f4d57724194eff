//! Prompt types for the Relief Explainer.

use serde::{Deserialize, Serialize};

/// A prompt template, built in or loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Unique template identifier
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// API version for schema evolution
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Handlebars template; receives `context` and `question`
    pub template: String,
}

/// A fully rendered prompt ready for the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltPrompt {
    /// Rendered prompt text
    pub text: String,

    /// Template the prompt came from
    #[serde(rename = "sourceTemplateId")]
    pub source_template_id: String,
}
