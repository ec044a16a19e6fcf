//! Error types for the Scrivener library.
//!
//! This crate provides the failure taxonomy shared by every other
//! Scrivener crate, plus the top-level error wrapper.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The four classified kinds (`Validation`, `RateLimit`, `Api`, `Network`)
//! drive retry and fallback decisions throughout the orchestration layer;
//! `Exhausted` is the aggregate raised when every provider has failed with
//! mixed kinds.
//!
//! # Examples
//!
//! ```
//! use scrivener_error::{ReviewError, ScrivenerResult};
//!
//! fn call_provider() -> ScrivenerResult<String> {
//!     Err(ReviewError::network("connection refused"))?
//! }
//!
//! match call_provider() {
//!     Ok(analysis) => println!("Got: {}", analysis),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod retryable;
mod review;

pub use config::ConfigError;
pub use error::{ScrivenerError, ScrivenerErrorKind, ScrivenerResult};
pub use retryable::RetryableError;
pub use review::{ReviewError, ReviewErrorKind};
