//! Review result type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A successful analysis, created once and returned to the caller.
///
/// `provider` always names the adapter that actually executed the
/// successful call, never one that was merely attempted.
///
/// # Examples
///
/// ```
/// use scrivener_core::ReviewResult;
///
/// let result = ReviewResult::new("The clause lacks a notice period.", "anthropic");
/// assert_eq!(result.provider, "anthropic");
/// assert!(!result.analysis.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    /// The generated analysis text; non-empty on success.
    pub analysis: String,
    /// Name of the provider that produced the analysis.
    pub provider: String,
    /// When the analysis was produced.
    pub produced_at: DateTime<Utc>,
}

impl ReviewResult {
    /// Create a result stamped with the current time.
    pub fn new(analysis: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            analysis: analysis.into(),
            provider: provider.into(),
            produced_at: Utc::now(),
        }
    }
}
