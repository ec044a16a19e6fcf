//! Bounded retry with exponential backoff.
//!
//! Wraps a single provider call. Validation failures propagate
//! immediately; transient failures are re-attempted up to the configured
//! bound, waiting either the computed exponential delay or the
//! provider-supplied retry-after hint when one is present.

use scrivener_error::RetryableError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tokio_retry2::strategy::ExponentialBackoff;
use tracing::warn;

/// Retry policy parameters.
///
/// Defaults: 3 attempts, 1s initial delay doubling per attempt, capped at
/// 10s. Delays are deterministic (no jitter) so callers can reason about
/// the worst-case latency ceiling per provider attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, including the first. Values below 1 behave as 1.
    pub max_attempts: u32,
    /// Delay before the second attempt, in milliseconds.
    pub initial_delay_ms: u64,
    /// Multiplier applied to the delay after each attempt. Must be >= 1,
    /// and for exact delays should divide `initial_delay_ms` evenly.
    pub backoff_factor: u64,
    /// Upper bound on any computed delay, in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 1000,
            backoff_factor: 2,
            max_delay_ms: 10_000,
        }
    }
}

impl RetryConfig {
    /// Delay sequence between attempts.
    ///
    /// `ExponentialBackoff` yields `factor * base^n`, so the configured
    /// initial delay is folded into the scaling factor: with the defaults
    /// this produces 1s, 2s between the three attempts.
    fn strategy(&self) -> impl Iterator<Item = Duration> {
        let base = self.backoff_factor.max(1);
        let scale = (self.initial_delay_ms / base).max(1);
        ExponentialBackoff::from_millis(base)
            .factor(scale)
            .max_delay(Duration::from_millis(self.max_delay_ms))
            .take((self.max_attempts as usize).saturating_sub(1))
    }
}

/// Execute `operation` with bounded retry and exponential backoff.
///
/// Policy, per attempt:
/// 1. Execute the operation.
/// 2. A non-retryable error (validation) propagates immediately.
/// 3. A retryable error waits for the provider's retry-after hint when
///    present, otherwise the computed backoff delay, then retries.
/// 4. After `max_attempts` failed attempts the last error propagates
///    unchanged.
///
/// The policy is provider-agnostic; it trusts the adapter to have
/// classified the failure correctly.
///
/// # Examples
///
/// ```rust,ignore
/// use scrivener_rate_limit::{RetryConfig, with_retry};
///
/// let analysis = with_retry(&RetryConfig::default(), || async {
///     driver.call_once(&prompt).await
/// })
/// .await?;
/// ```
pub async fn with_retry<F, Fut, T, E>(config: &RetryConfig, operation: F) -> Result<T, E>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: RetryableError + Display,
{
    let mut delays = config.strategy();
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if !e.is_retryable() {
                    warn!(error = %e, "permanent failure, not retrying");
                    return Err(e);
                }
                let Some(computed) = delays.next() else {
                    warn!(error = %e, "retry budget exhausted");
                    return Err(e);
                };
                // The provider's explicit hint wins over the computed delay.
                let wait = e.retry_after().unwrap_or(computed);
                warn!(error = %e, wait_ms = wait.as_millis() as u64, "transient failure, will retry");
                sleep(wait).await;
            }
        }
    }
}
