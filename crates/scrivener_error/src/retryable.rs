//! Retry classification for errors.

use crate::{ReviewErrorKind, ScrivenerError};
use std::time::Duration;

/// Classification consumed by the retry policy.
///
/// Validation failures are a caller bug and must never be retried;
/// rate-limit, API, and network failures are transient and may be
/// re-attempted within bounded limits. A rate-limited provider often
/// supplies an explicit wait via [`RetryableError::retry_after`], which
/// takes precedence over computed backoff delays.
pub trait RetryableError {
    /// Whether the retry policy may re-attempt the failed operation.
    fn is_retryable(&self) -> bool;

    /// Provider-supplied wait before the next attempt, when present.
    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

impl RetryableError for ScrivenerError {
    fn is_retryable(&self) -> bool {
        match self.as_review() {
            Some(err) => match err.kind() {
                ReviewErrorKind::RateLimit(_)
                | ReviewErrorKind::Api(_)
                | ReviewErrorKind::Network(_) => true,
                ReviewErrorKind::Validation(_) | ReviewErrorKind::Exhausted(_) => false,
            },
            // Configuration errors are startup conditions, not transient.
            None => false,
        }
    }

    fn retry_after(&self) -> Option<Duration> {
        self.as_review().and_then(|err| err.retry_after())
    }
}
