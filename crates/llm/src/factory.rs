//! Text-generation provider factory.
//!
//! Resolves a provider name from configuration into a client, checking the
//! secrets that provider needs.

use crate::client::LlmClient;
use crate::providers::GeminiClient;
use relief_core::config::DEFAULT_ENDPOINT;
use std::sync::Arc;

/// Create a text-generation client based on the provider name.
///
/// # Arguments
/// * `provider` - Provider identifier ("gemini" or "google")
/// * `endpoint` - Optional custom endpoint URL
/// * `api_key` - API key for the provider
///
/// # Errors
/// Returns error if the provider is unknown or its API key is missing.
pub fn create_client(
    provider: &str,
    endpoint: Option<&str>,
    api_key: Option<&str>,
) -> Result<Arc<dyn LlmClient>, String> {
    match provider.to_lowercase().as_str() {
        "gemini" | "google" => {
            let api_key = api_key
                .filter(|key| !key.trim().is_empty())
                .ok_or_else(|| "Gemini provider requires API key".to_string())?;
            let base_url = endpoint.unwrap_or(DEFAULT_ENDPOINT);
            Ok(Arc::new(GeminiClient::with_base_url(base_url, api_key)))
        }
        _ => Err(format!("Unknown provider: {}", provider)),
    }
}
