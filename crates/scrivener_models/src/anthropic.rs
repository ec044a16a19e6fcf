//! Anthropic messages-API adapter.

use crate::openai_compat::{classify_transport, parse_retry_after};
use crate::prompts::ClausePrompts;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scrivener_core::ReviewRequest;
use scrivener_error::{ConfigError, ReviewError, ScrivenerError, ScrivenerResult};
use scrivener_interface::{PromptSource, ReviewDriver};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-3-opus-20240229";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<MessageBlock<'a>>,
}

#[derive(Debug, Serialize)]
struct MessageBlock<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

/// Review adapter for the Anthropic API. Second in the fallback chain.
#[derive(Clone)]
pub struct AnthropicReviewer {
    client: Client,
    api_key: String,
    model: String,
    prompts: Arc<dyn PromptSource>,
}

impl AnthropicReviewer {
    /// Creates an adapter with an explicit API key.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new Anthropic reviewer");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            prompts: Arc::new(ClausePrompts),
        }
    }

    /// Creates an adapter reading the key from `ANTHROPIC_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the variable is not set.
    #[instrument(skip_all, fields(model = %model))]
    pub fn from_env(model: &str) -> ScrivenerResult<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|e| ConfigError::new(format!("ANTHROPIC_API_KEY not set: {}", e)))?;
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
impl ReviewDriver for AnthropicReviewer {
    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn generate_prompt(&self, request: &ReviewRequest) -> ScrivenerResult<String> {
        request
            .validate()
            .map_err(|e| e.with_provider(self.provider_name()))?;
        self.prompts.prompt_for(request, self.provider_name())
    }

    #[instrument(skip(self, prompt), fields(provider = "anthropic", model = %self.model))]
    async fn call_once(&self, prompt: &str) -> ScrivenerResult<String> {
        debug!("Sending request to Anthropic API");

        let request = MessagesRequest {
            model: &self.model,
            max_tokens: 1500,
            temperature: 0.5,
            messages: vec![MessageBlock {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Transport failure reaching Anthropic");
                classify_transport("anthropic", &e)
            })?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = parse_retry_after(response.headers());
            error!(retry_after = ?retry_after, "Anthropic signalled rate limit");
            let mut err =
                ReviewError::rate_limit("anthropic rate limit exceeded").with_provider("anthropic");
            if let Some(hint) = retry_after {
                err = err.with_retry_after(hint);
            }
            return Err(err.into());
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic returned error");
            return Err(
                ReviewError::api(format!("anthropic returned {}: {}", status, body))
                    .with_provider("anthropic")
                    .into(),
            );
        }

        let parsed: MessagesResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            ScrivenerError::from(
                ReviewError::api(format!("failed to parse anthropic response: {}", e))
                    .with_provider("anthropic"),
            )
        })?;

        let analysis = parsed
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .unwrap_or_default();

        if analysis.trim().is_empty() {
            return Err(ReviewError::api("anthropic response contained no analysis")
                .with_provider("anthropic")
                .into());
        }

        Ok(analysis)
    }
}
