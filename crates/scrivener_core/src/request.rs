//! Review request type.

use crate::ReviewKind;
use scrivener_error::{ReviewError, ScrivenerResult};
use serde::{Deserialize, Serialize};

/// A caller's request for one analysis of one clause.
///
/// Immutable once constructed. Invalid combinations are rejected by
/// [`ReviewRequest::validate`] before any network call is attempted.
///
/// # Examples
///
/// ```
/// use scrivener_core::{ReviewKind, ReviewRequest};
///
/// let request = ReviewRequest::builder()
///     .clause("The party of the first part shall indemnify...".to_string())
///     .kind(ReviewKind::Risks)
///     .build()
///     .unwrap();
///
/// assert!(request.validate().is_ok());
/// assert_eq!(request.provider, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ReviewRequest {
    /// The clause text to analyze.
    pub clause: String,
    /// Which analysis to produce.
    pub kind: ReviewKind,
    /// Explicit provider choice; when set, only that provider is attempted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub provider: Option<String>,
}

impl ReviewRequest {
    /// Start building a request.
    pub fn builder() -> ReviewRequestBuilder {
        ReviewRequestBuilder::default()
    }

    /// Reject malformed requests before any provider is called.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error when the clause is empty after trimming.
    pub fn validate(&self) -> ScrivenerResult<()> {
        if self.clause.trim().is_empty() {
            return Err(ReviewError::validation("clause must not be empty").into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrivener_error::ReviewErrorKind;

    fn request(clause: &str) -> ReviewRequest {
        ReviewRequest::builder()
            .clause(clause.to_string())
            .kind(ReviewKind::Ambiguities)
            .build()
            .unwrap()
    }

    #[test]
    fn whitespace_only_clause_is_invalid() {
        let err = request("   \n\t ").validate().unwrap_err();
        let review = err.as_review().expect("classified error");
        assert!(matches!(review.kind(), ReviewErrorKind::Validation(_)));
    }

    #[test]
    fn non_empty_clause_is_valid() {
        assert!(request("Tenant shall maintain insurance.").validate().is_ok());
    }

    #[test]
    fn serde_round_trip() {
        let original = ReviewRequest::builder()
            .clause("x".to_string())
            .kind(ReviewKind::Completeness)
            .provider(Some("openai".to_string()))
            .build()
            .unwrap();
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("COMPLETENESS"));
        let parsed: ReviewRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
