//! Answer synthesizer: one prompt, one text-generation call.

use relief_core::AppResult;
use relief_llm::{LlmClient, LlmRequest};
use relief_prompt::{build_prompt, default_template, PromptTemplate};
use std::sync::Arc;

/// Turns retrieved context and a question into a model-written answer.
pub struct AnswerSynthesizer {
    client: Arc<dyn LlmClient>,
    template: PromptTemplate,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl AnswerSynthesizer {
    /// Create a synthesizer using the built-in template.
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            template: default_template(),
            model: model.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Replace the prompt template.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Provider behind this synthesizer.
    pub fn provider_name(&self) -> &str {
        self.client.provider_name()
    }

    /// Ask the model to answer `question` from `context`.
    ///
    /// Returns the model's text verbatim. Transport, credential and decoding
    /// failures come back as `AppError::Synthesis`; nothing is retried.
    pub async fn synthesize(&self, context: &str, question: &str) -> AppResult<String> {
        let prompt = build_prompt(&self.template, context, question)?;

        let mut request = LlmRequest::new(prompt.text, &self.model);
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        tracing::debug!(
            "Synthesizing with {} ({}), context bytes: {}",
            self.client.provider_name(),
            self.model,
            context.len()
        );

        let response = self.client.complete(&request).await?;
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeClient;
    use relief_core::{AppError, SynthesisError};

    #[tokio::test]
    async fn test_synthesize_returns_model_text() {
        let client = Arc::new(FakeClient::answering("Move to a designated shelter."));
        let synthesizer = AnswerSynthesizer::new(client.clone(), "gemini-1.5-flash")
            .with_temperature(Some(0.2))
            .with_max_tokens(Some(300));

        let answer = synthesizer
            .synthesize("Shelters are listed by the district.", "Where do I go?")
            .await
            .unwrap();

        assert_eq!(answer, "Move to a designated shelter.");

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gemini-1.5-flash");
        assert_eq!(requests[0].temperature, Some(0.2));
        assert_eq!(requests[0].max_tokens, Some(300));
        assert!(requests[0]
            .prompt
            .contains("Shelters are listed by the district."));
        assert!(requests[0].prompt.contains("Where do I go?"));
    }

    #[tokio::test]
    async fn test_custom_template() {
        let client = Arc::new(FakeClient::answering("ok"));
        let template = PromptTemplate {
            id: "t".to_string(),
            title: "T".to_string(),
            api_version: "1.0".to_string(),
            template: "[{{context}}] {{question}}".to_string(),
        };
        let synthesizer = AnswerSynthesizer::new(client.clone(), "m").with_template(template);

        synthesizer.synthesize("ctx", "q?").await.unwrap();
        assert_eq!(client.requests()[0].prompt, "[ctx] q?");
    }

    #[tokio::test]
    async fn test_failure_propagates() {
        let client = Arc::new(FakeClient::failing(SynthesisError::RateLimited(
            "quota".to_string(),
        )));
        let synthesizer = AnswerSynthesizer::new(client, "m");

        let result = synthesizer.synthesize("ctx", "q").await;
        assert!(matches!(
            result,
            Err(AppError::Synthesis(SynthesisError::RateLimited(_)))
        ));
    }
}
