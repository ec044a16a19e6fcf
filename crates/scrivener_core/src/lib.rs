//! Core data types for the Scrivener clause review library.
//!
//! This crate provides the request and result types shared across all
//! Scrivener interfaces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod kind;
mod request;
mod result;

pub use kind::ReviewKind;
pub use request::{ReviewRequest, ReviewRequestBuilder};
pub use result::ReviewResult;
