//! Analysis kinds for clause review.

use serde::{Deserialize, Serialize};

/// The fixed set of analyses a caller can request for a clause.
///
/// # Examples
///
/// ```
/// use scrivener_core::ReviewKind;
/// use std::str::FromStr;
///
/// let kind = ReviewKind::from_str("RISKS").unwrap();
/// assert_eq!(kind, ReviewKind::Risks);
/// assert_eq!(kind.to_string(), "RISKS");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewKind {
    /// Identify legal and practical risks in the clause.
    Risks,
    /// Suggest concrete improvements to the clause.
    Improvements,
    /// Flag missing provisions the clause should cover.
    Completeness,
    /// Propose simpler phrasing with the same effect.
    Simplification,
    /// Point out ambiguous language open to multiple readings.
    Ambiguities,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn display_and_parse_round_trip() {
        for kind in ReviewKind::iter() {
            let rendered = kind.to_string();
            assert_eq!(ReviewKind::from_str(&rendered).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(ReviewKind::from_str("SENTIMENT").is_err());
    }
}
