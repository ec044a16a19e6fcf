//! Shared client for chat-completions style APIs.
//!
//! OpenAI and Perplexity expose the same request/response shape, so both
//! adapters delegate the wire handling and failure classification to this
//! client.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use scrivener_error::{ReviewError, ScrivenerError, ScrivenerResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Client for OpenAI-compatible chat-completions endpoints.
///
/// Performs exactly one HTTP call per [`OpenAiCompatibleClient::complete`]
/// invocation and classifies every failure: HTTP 429 maps to `RateLimit`
/// with any `Retry-After` hint attached, other non-success statuses and
/// malformed bodies map to `Api`, and transport failures map to `Network`.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    provider: &'static str,
}

impl OpenAiCompatibleClient {
    /// Create a client for one provider's endpoint.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        provider: &'static str,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
            provider,
        }
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Provider name used to stamp classified errors.
    pub fn provider(&self) -> &'static str {
        self.provider
    }

    /// Send one completion request and return the analysis text.
    #[instrument(skip(self, prompt), fields(provider = self.provider, model = %self.model))]
    pub async fn complete(&self, prompt: &str) -> ScrivenerResult<String> {
        debug!("Sending chat completion request");

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.7,
            max_tokens: 1000,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Transport failure reaching provider");
                classify_transport(self.provider, &e)
            })?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = parse_retry_after(response.headers());
            error!(retry_after = ?retry_after, "Provider signalled rate limit");
            let mut err = ReviewError::rate_limit(format!("{} rate limit exceeded", self.provider))
                .with_provider(self.provider);
            if let Some(hint) = retry_after {
                err = err.with_retry_after(hint);
            }
            return Err(err.into());
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Provider returned error");
            return Err(ReviewError::api(format!(
                "{} returned {}: {}",
                self.provider, status, body
            ))
            .with_provider(self.provider)
            .into());
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse provider response");
            ScrivenerError::from(
                ReviewError::api(format!("failed to parse {} response: {}", self.provider, e))
                    .with_provider(self.provider),
            )
        })?;

        let analysis = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if analysis.trim().is_empty() {
            return Err(ReviewError::api(format!(
                "{} response contained no analysis",
                self.provider
            ))
            .with_provider(self.provider)
            .into());
        }

        Ok(analysis)
    }
}

/// Map a transport-level failure into the shared taxonomy.
pub(crate) fn classify_transport(provider: &'static str, err: &reqwest::Error) -> ScrivenerError {
    ReviewError::network(format!("{} unreachable: {}", provider, err))
        .with_provider(provider)
        .into()
}

/// Parse a `Retry-After` header given in whole seconds.
pub(crate) fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn retry_after_seconds_parse_to_duration() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("2"));
        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(2)));
    }

    #[test]
    fn missing_or_malformed_retry_after_is_none() {
        assert_eq!(parse_retry_after(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        // The HTTP-date form of Retry-After is not supported here.
        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        assert_eq!(parse_retry_after(&headers), None);
    }

    #[test]
    fn chat_response_tolerates_missing_choices() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn chat_response_extracts_content() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"looks risky"}}]}"#,
        )
        .unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("looks risky"));
    }
}
