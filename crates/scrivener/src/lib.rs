//! Scrivener — multi-provider contract clause review.
//!
//! Scrivener takes a contract clause plus a requested analysis kind and
//! returns a generated analysis, sourced from one of several
//! interchangeable LLM providers. The library centers on the provider
//! orchestration layer: per-provider token-bucket admission control,
//! bounded retry with exponential backoff, and a priority-ordered fallback
//! chain that tries providers until one succeeds.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scrivener::{ReviewKind, ReviewManager, ReviewRequest, ScrivenerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScrivenerConfig::load()?;
//!     let manager = ReviewManager::from_env(&config)?;
//!
//!     let request = ReviewRequest::builder()
//!         .clause("The supplier may change prices at any time.".to_string())
//!         .kind(ReviewKind::Risks)
//!         .build()?;
//!
//!     let result = manager.review(&request).await?;
//!     println!("[{}] {}", result.provider, result.analysis);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Scrivener is organized as a workspace with focused crates:
//!
//! - `scrivener_error` - failure taxonomy and top-level error wrapper
//! - `scrivener_core` - request/result data types
//! - `scrivener_interface` - the `ReviewDriver` adapter contract
//! - `scrivener_rate_limit` - token-bucket limiter, retry policy, config
//! - `scrivener_models` - provider adapters (OpenAI, Anthropic, Perplexity)
//!
//! This crate (`scrivener`) holds the orchestrator and re-exports
//! everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod manager;
mod observability;

pub use manager::ReviewManager;
pub use observability::{ObservabilityConfig, init_tracing};

pub use scrivener_core::{ReviewKind, ReviewRequest, ReviewRequestBuilder, ReviewResult};
pub use scrivener_error::{
    ConfigError, RetryableError, ReviewError, ReviewErrorKind, ScrivenerError, ScrivenerErrorKind,
    ScrivenerResult,
};
pub use scrivener_interface::{PromptSource, ReviewDriver};
pub use scrivener_models::{
    AnthropicReviewer, ClausePrompts, OpenAiCompatibleClient, OpenAiReviewer, PerplexityReviewer,
};
pub use scrivener_rate_limit::{
    LimiterConfig, ProviderConfig, RateLimiter, RetryConfig, ScrivenerConfig, with_retry,
};
