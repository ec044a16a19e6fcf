//! Trait definitions for provider adapters.

use async_trait::async_trait;
use scrivener_core::ReviewRequest;
use scrivener_error::ScrivenerResult;

/// Core trait that every provider adapter must implement.
///
/// An adapter turns a request into a provider-specific prompt and performs
/// exactly one network call per [`ReviewDriver::call_once`] invocation,
/// translating provider-specific failures into the shared taxonomy. The
/// adapter never retries internally and never consults the rate limiter;
/// both are orchestration concerns layered around it.
#[async_trait]
pub trait ReviewDriver: Send + Sync {
    /// Stable provider name (e.g., "openai", "anthropic", "perplexity").
    fn provider_name(&self) -> &'static str;

    /// Position in the fallback chain; lower is tried first.
    ///
    /// Used only for ordering, not for correctness.
    fn priority(&self) -> u8;

    /// Build the finished prompt text for this provider.
    ///
    /// Validates the request first, so a malformed request surfaces as a
    /// `Validation` error here, before any limiter wait or network call.
    fn generate_prompt(&self, request: &ReviewRequest) -> ScrivenerResult<String>;

    /// Perform exactly one network call with the given prompt.
    ///
    /// On success returns non-empty analysis text. On failure the error
    /// must be classified: a provider rate-limit signal (HTTP 429) maps to
    /// `RateLimit` with any supplied retry-after hint attached; a malformed
    /// or empty response body maps to `Api`; a transport failure maps to
    /// `Network`. Every error is stamped with this adapter's provider name.
    async fn call_once(&self, prompt: &str) -> ScrivenerResult<String>;
}

/// Prompt-construction collaborator.
///
/// Given the request and a provider identifier, returns finished prompt
/// text. Templating and few-shot content live behind this seam; adapters
/// only require an opaque string producer.
pub trait PromptSource: Send + Sync {
    /// Produce the prompt for `provider` from the request.
    fn prompt_for(&self, request: &ReviewRequest, provider: &str) -> ScrivenerResult<String>;
}
