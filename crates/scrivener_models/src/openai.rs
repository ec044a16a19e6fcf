//! OpenAI chat-completions adapter.

use crate::openai_compat::OpenAiCompatibleClient;
use crate::prompts::ClausePrompts;
use async_trait::async_trait;
use scrivener_core::ReviewRequest;
use scrivener_error::{ConfigError, ScrivenerResult};
use scrivener_interface::{PromptSource, ReviewDriver};
use std::sync::Arc;
use tracing::instrument;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";

/// Review adapter for the OpenAI API. First in the fallback chain.
#[derive(Clone)]
pub struct OpenAiReviewer {
    inner: OpenAiCompatibleClient,
    prompts: Arc<dyn PromptSource>,
}

impl OpenAiReviewer {
    /// Creates an adapter with an explicit API key.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            inner: OpenAiCompatibleClient::new(api_key, model, OPENAI_API_URL, "openai"),
            prompts: Arc::new(ClausePrompts),
        }
    }

    /// Creates an adapter reading the key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the variable is not set.
    #[instrument(skip_all, fields(model = %model))]
    pub fn from_env(model: &str) -> ScrivenerResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|e| ConfigError::new(format!("OPENAI_API_KEY not set: {}", e)))?;
        Ok(Self::new(api_key, model))
    }

    /// Default model for this provider.
    pub fn default_model() -> &'static str {
        DEFAULT_MODEL
    }

    /// Replace the prompt-construction collaborator.
    pub fn with_prompts(mut self, prompts: Arc<dyn PromptSource>) -> Self {
        self.prompts = prompts;
        self
    }
}

#[async_trait]
impl ReviewDriver for OpenAiReviewer {
    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn priority(&self) -> u8 {
        1
    }

    fn generate_prompt(&self, request: &ReviewRequest) -> ScrivenerResult<String> {
        request
            .validate()
            .map_err(|e| e.with_provider(self.provider_name()))?;
        self.prompts.prompt_for(request, self.provider_name())
    }

    #[instrument(skip(self, prompt), fields(provider = "openai"))]
    async fn call_once(&self, prompt: &str) -> ScrivenerResult<String> {
        self.inner.complete(prompt).await
    }
}
