//! LLM provider adapters for Scrivener.
//!
//! Each adapter implements [`scrivener_interface::ReviewDriver`]: it turns
//! a review request into a provider-specific prompt, performs exactly one
//! network call per invocation, and classifies every failure into the
//! shared taxonomy. Retry and rate limiting are layered around the adapter
//! by the orchestrator, never inside it.
//!
//! OpenAI and Perplexity speak the same chat-completions wire format and
//! share [`OpenAiCompatibleClient`]; Anthropic has its own messages API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod openai;
mod openai_compat;
mod perplexity;
mod prompts;

pub use anthropic::AnthropicReviewer;
pub use openai::OpenAiReviewer;
pub use openai_compat::OpenAiCompatibleClient;
pub use perplexity::PerplexityReviewer;
pub use prompts::ClausePrompts;
