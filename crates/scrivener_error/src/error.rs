//! Top-level error wrapper types.

use crate::{ConfigError, ReviewError};

/// The foundation error enum for the Scrivener workspace.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ReviewError, ScrivenerError};
///
/// let review_err = ReviewError::api("server error");
/// let err: ScrivenerError = review_err.into();
/// assert!(format!("{}", err).contains("API error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScrivenerErrorKind {
    /// Classified review failure
    #[from(ReviewError)]
    Review(ReviewError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Scrivener error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ConfigError, ScrivenerResult};
///
/// fn might_fail() -> ScrivenerResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scrivener Error: {}", _0)]
pub struct ScrivenerError(Box<ScrivenerErrorKind>);

impl ScrivenerError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivenerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivenerErrorKind {
        &self.0
    }

    /// The classified review error inside this error, if that is what it is.
    ///
    /// The orchestration layer uses this to inspect the failure taxonomy
    /// (kind, provider, retry-after hint) without unwrapping the enum at
    /// every call site.
    pub fn as_review(&self) -> Option<&ReviewError> {
        match self.kind() {
            ScrivenerErrorKind::Review(err) => Some(err),
            ScrivenerErrorKind::Config(_) => None,
        }
    }

    /// Stamp a classified error with its originating provider.
    ///
    /// A provider already recorded at the failure site is kept; config
    /// errors pass through unchanged.
    pub fn with_provider(self, provider: impl Into<String>) -> Self {
        match *self.0 {
            ScrivenerErrorKind::Review(err) if err.provider().is_none() => {
                Self::new(ScrivenerErrorKind::Review(err.with_provider(provider)))
            }
            kind => Self::new(kind),
        }
    }
}

// Generic From implementation for any type that converts to ScrivenerErrorKind
impl<T> From<T> for ScrivenerError
where
    T: Into<ScrivenerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivener operations.
///
/// # Examples
///
/// ```
/// use scrivener_error::{ReviewError, ScrivenerResult};
///
/// fn fetch_analysis() -> ScrivenerResult<String> {
///     Err(ReviewError::api("502 Bad Gateway"))?
/// }
/// ```
pub type ScrivenerResult<T> = std::result::Result<T, ScrivenerError>;
