//! Rate limiting and retry policy for Scrivener.
//!
//! This crate provides per-provider admission control (a token bucket per
//! provider name) and the bounded exponential-backoff retry policy wrapped
//! around each provider call. Configuration is TOML-based with bundled
//! defaults and optional user overrides.
//!
//! The limiter never rejects: [`RateLimiter::acquire`] suspends the caller
//! for exactly the time one token needs to accrue, so it smooths local call
//! rate before a call is attempted and never produces a rate-limit error
//! itself.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod limiter;
mod retry;

pub use config::{ProviderConfig, ScrivenerConfig};
pub use limiter::{LimiterConfig, RateLimiter};
pub use retry::{RetryConfig, with_retry};
