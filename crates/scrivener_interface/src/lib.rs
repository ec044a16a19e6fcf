//! Trait definitions for the Scrivener clause review library.
//!
//! This crate provides the driver contract every provider adapter
//! implements and the prompt-construction seam adapters delegate to.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{PromptSource, ReviewDriver};
