//! Perplexity adapter, speaking the OpenAI-compatible wire format.

use crate::openai_compat::OpenAiCompatibleClient;
use crate::prompts::ClausePrompts;
use async_trait::async_trait;
use scrivener_core::ReviewRequest;
use scrivener_error::{ConfigError, ScrivenerResult};
use scrivener_interface::{PromptSource, ReviewDriver};
use std::sync::Arc;
use tracing::instrument;

const PERPLEXITY_API_URL: &str = "https://api.perplexity.ai/chat/completions";
const DEFAULT_MODEL: &str = "sonar-pro";

/// Review adapter for the Perplexity API. Last in the fallback chain.
#[derive(Clone)]
pub struct PerplexityReviewer {
    inner: OpenAiCompatibleClient,
    prompts: Arc<dyn PromptSource>,
}

impl PerplexityReviewer {
    /// Creates an adapter with an explicit API key.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            inner: OpenAiCompatibleClient::new(api_key, model, PERPLEXITY_API_URL, "perplexity"),
            prompts: Arc::new(ClausePrompts),
        }
    }

    /// Creates an adapter reading the key from `PERPLEXITY_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the variable is not set.
    #[instrument(skip_all, fields(model = %model))]
    pub fn from_env(model: &str) -> ScrivenerResult<Self> {
        let api_key = std::env::var("PERPLEXITY_API_KEY")
            .map_err(|e| ConfigError::new(format!("PERPLEXITY_API_KEY not set: {}", e)))?;
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
impl ReviewDriver for PerplexityReviewer {
    fn provider_name(&self) -> &'static str {
        "perplexity"
    }

    fn priority(&self) -> u8 {
        3
    }

    fn generate_prompt(&self, request: &ReviewRequest) -> ScrivenerResult<String> {
        request
            .validate()
            .map_err(|e| e.with_provider(self.provider_name()))?;
        self.prompts.prompt_for(request, self.provider_name())
    }

    #[instrument(skip(self, prompt), fields(provider = "perplexity"))]
    async fn call_once(&self, prompt: &str) -> ScrivenerResult<String> {
        self.inner.complete(prompt).await
    }
}
