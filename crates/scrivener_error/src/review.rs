//! Classified review errors.
//!
//! Every failure produced while servicing a review request is tagged with
//! one of these kinds. The kind decides whether the retry policy may
//! re-attempt the call and whether the orchestrator may fall back to the
//! next provider.

use std::time::Duration;

/// The failure taxonomy for review operations.
///
/// | Kind | Retryable (same provider) | Triggers fallback |
/// |------|---------------------------|-------------------|
/// | `Validation` | no | no |
/// | `RateLimit` | yes, after waiting the hint | yes |
/// | `Api` | yes, bounded | yes |
/// | `Network` | yes, bounded | yes |
/// | `Exhausted` | no | n/a (terminal aggregate) |
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ReviewErrorKind {
    /// The request itself is malformed; a caller bug, never a provider failure.
    #[display("Validation error: {}", _0)]
    Validation(String),

    /// Admission control denied the call or the provider signalled a rate limit.
    #[display("Rate limited: {}", _0)]
    RateLimit(String),

    /// The provider was reachable but returned a non-success result.
    #[display("API error: {}", _0)]
    Api(String),

    /// Transport-level failure reaching the provider.
    #[display("Network error: {}", _0)]
    Network(String),

    /// Every configured provider failed with mixed kinds.
    #[display("All providers failed: {}", _0)]
    Exhausted(String),
}

/// Classified review error with location tracking.
///
/// Carries the originating provider name when the failure came out of a
/// specific adapter, and an optional retry-after hint when the provider
/// supplied one.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ReviewError, ReviewErrorKind};
/// use std::time::Duration;
///
/// let err = ReviewError::rate_limit("quota exceeded")
///     .with_provider("openai")
///     .with_retry_after(Duration::from_millis(200));
///
/// assert!(matches!(err.kind(), ReviewErrorKind::RateLimit(_)));
/// assert_eq!(err.provider(), Some("openai"));
/// ```
#[derive(Debug, Clone, derive_more::Display)]
#[display("Review Error: {} at line {} in {}", kind, line, file)]
pub struct ReviewError {
    kind: ReviewErrorKind,
    provider: Option<String>,
    retry_after: Option<Duration>,
    line: u32,
    file: &'static str,
}

impl ReviewError {
    /// Create a new review error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ReviewErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            provider: None,
            retry_after: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// A `Validation` error.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ReviewErrorKind::Validation(message.into()))
    }

    /// A `RateLimit` error.
    #[track_caller]
    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(ReviewErrorKind::RateLimit(message.into()))
    }

    /// An `Api` error.
    #[track_caller]
    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ReviewErrorKind::Api(message.into()))
    }

    /// A `Network` error.
    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ReviewErrorKind::Network(message.into()))
    }

    /// The terminal aggregate raised after the fallback chain is exhausted.
    #[track_caller]
    pub fn exhausted(message: impl Into<String>) -> Self {
        Self::new(ReviewErrorKind::Exhausted(message.into()))
    }

    /// Attach the originating provider name.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Attach a provider-supplied retry-after hint.
    pub fn with_retry_after(mut self, retry_after: Duration) -> Self {
        self.retry_after = Some(retry_after);
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ReviewErrorKind {
        &self.kind
    }

    /// The provider the error originated from, when known.
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// The provider-supplied retry-after hint, when present.
    pub fn retry_after(&self) -> Option<Duration> {
        self.retry_after
    }

    /// Whether this is a `Validation` error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ReviewErrorKind::Validation(_))
    }

    /// Whether this is a `RateLimit` error.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self.kind, ReviewErrorKind::RateLimit(_))
    }
}

impl std::error::Error for ReviewError {}
