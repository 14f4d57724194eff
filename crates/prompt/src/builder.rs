//! Prompt builder for rendering templates.

use crate::types::{BuiltPrompt, PromptTemplate};
use handlebars::Handlebars;
use relief_core::{AppError, AppResult};
use std::collections::HashMap;

/// Render `template` with the retrieved context and the user's question.
///
/// Escaping is disabled: both values are plain text, not HTML.
///
/// # Example
/// ```
/// use relief_prompt::{build_prompt, default_template};
///
/// let built = build_prompt(
///     &default_template(),
///     "Evacuation means leaving a dangerous area.",
///     "What is evacuation?",
/// )
/// .unwrap();
/// assert!(built.text.contains("What is evacuation?"));
/// ```
pub fn build_prompt(
    template: &PromptTemplate,
    context: &str,
    question: &str,
) -> AppResult<BuiltPrompt> {
    tracing::debug!("Building prompt: {}", template.id);

    let mut variables = HashMap::new();
    variables.insert("context", context);
    variables.insert("question", question.trim());

    let text = render_template(&template.template, &variables)?;

    Ok(BuiltPrompt {
        text,
        source_template_id: template.id.clone(),
    })
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &HashMap<&str, &str>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Disable HTML escaping for plain text
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    handlebars
        .render("prompt", variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::default_template;

    fn template(body: &str) -> PromptTemplate {
        PromptTemplate {
            id: "test.prompt".to_string(),
            title: "Test".to_string(),
            api_version: "1.0".to_string(),
            template: body.to_string(),
        }
    }

    #[test]
    fn test_render_context_and_question() {
        let built = build_prompt(
            &template("C: {{context}}\nQ: {{question}}"),
            "Shelters open at 6pm.",
            "  When do shelters open?  ",
        )
        .unwrap();

        assert_eq!(built.text, "C: Shelters open at 6pm.\nQ: When do shelters open?");
        assert_eq!(built.source_template_id, "test.prompt");
    }

    #[test]
    fn test_no_html_escaping() {
        let built = build_prompt(
            &template("{{context}}"),
            "Water < 2 days & food > 3 days",
            "q",
        )
        .unwrap();
        assert_eq!(built.text, "Water < 2 days & food > 3 days");
    }

    #[test]
    fn test_default_template_embeds_both_parts() {
        let context = "Relief camps provide food.\n\nCamps need clean water.";
        let built = build_prompt(&default_template(), context, "How do relief camps work?").unwrap();

        assert!(built.text.contains(context));
        assert!(built.text.contains("How do relief camps work?"));
        assert!(built.text.find(context) < built.text.find("How do relief camps work?"));
    }

    #[test]
    fn test_invalid_template_syntax() {
        let result = build_prompt(&template("{{#if}}"), "c", "q");
        assert!(matches!(result, Err(AppError::Prompt(_))));
    }
}
