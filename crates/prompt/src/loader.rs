//! Prompt template loading.

use crate::types::PromptTemplate;
use relief_core::{AppError, AppResult};
use std::path::Path;

/// Identifier of the built-in template.
pub const DEFAULT_TEMPLATE_ID: &str = "relief.explainer.default";

const DEFAULT_TEMPLATE: &str = "\
You are a Disaster Response & Relief Explainer, a public information assistant \
for disaster preparedness and awareness.

Answer the question using ONLY the context below. Keep to general explanations \
of disaster response and relief processes: evacuation procedures, relief camp \
operations, disaster response stages and general safety guidelines.
Never issue alerts, give real-time instructions or coordinate rescue.
If the context does not contain the answer, reply exactly: \
\"I do not have information on this topic.\"

Context:
{{context}}

Question:
{{question}}

Answer:";

/// The built-in explainer template.
pub fn default_template() -> PromptTemplate {
    PromptTemplate {
        id: DEFAULT_TEMPLATE_ID.to_string(),
        title: "Disaster Response & Relief Explainer".to_string(),
        api_version: "1.0".to_string(),
        template: DEFAULT_TEMPLATE.to_string(),
    }
}

/// Load a template override from a YAML file.
///
/// # Example
/// ```no_run
/// use relief_prompt::load_template;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let template = load_template(Path::new("prompts/explainer.yml"))?;
/// println!("Loaded template: {}", template.title);
/// # Ok(())
/// # }
/// ```
pub fn load_template(path: &Path) -> AppResult<PromptTemplate> {
    tracing::debug!("Loading prompt template from: {:?}", path);

    if !path.exists() {
        return Err(AppError::Prompt(format!(
            "Prompt file not found: {:?}",
            path
        )));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::Prompt(format!("Failed to read prompt file {:?}: {}", path, e))
    })?;

    let template: PromptTemplate = serde_yaml::from_str(&contents).map_err(|e| {
        AppError::Prompt(format!("Failed to parse prompt YAML {:?}: {}", path, e))
    })?;

    validate_template(&template)?;

    tracing::info!("Loaded prompt: {} ({})", template.id, template.title);

    Ok(template)
}

/// Validate a template definition.
fn validate_template(def: &PromptTemplate) -> AppResult<()> {
    if def.id.is_empty() {
        return Err(AppError::Prompt("Prompt ID cannot be empty".to_string()));
    }

    if def.title.is_empty() {
        return Err(AppError::Prompt("Prompt title cannot be empty".to_string()));
    }

    if def.template.trim().is_empty() {
        return Err(AppError::Prompt(
            "Prompt template cannot be empty".to_string(),
        ));
    }

    if !def.api_version.contains('.') {
        return Err(AppError::Prompt(format!(
            "Invalid apiVersion format: {}. Expected format: 'x.y'",
            def.api_version
        )));
    }

    if !def.template.contains("{{question}}") {
        tracing::warn!("Prompt {} never references {{{{question}}}}", def.id);
    }

    Ok(())
}
