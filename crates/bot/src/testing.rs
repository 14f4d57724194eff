//! Scripted text-generation client for tests.

use relief_core::SynthesisError;
use relief_llm::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use std::sync::Mutex;

/// Replies with a fixed answer or a fixed error and records every request.
pub(crate) struct FakeClient {
    reply: Result<String, SynthesisError>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl FakeClient {
    pub(crate) fn answering(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(error: SynthesisError) -> Self {
        Self {
            reply: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LlmClient for FakeClient {
    fn provider_name(&self) -> &str {
        "fake"
    }

    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, SynthesisError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map(|content| LlmResponse {
            content,
            model: request.model.clone(),
            usage: LlmUsage::default(),
        })
    }
}
