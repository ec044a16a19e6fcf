//! Default prompt construction.
//!
//! Prompt wording is deliberately minimal; richer templating belongs to
//! the collaborator behind the [`PromptSource`] seam.

use scrivener_core::{ReviewKind, ReviewRequest};
use scrivener_error::ScrivenerResult;
use scrivener_interface::PromptSource;

/// Minimal prompt source: one instruction per analysis kind plus the clause.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClausePrompts;

impl PromptSource for ClausePrompts {
    fn prompt_for(&self, request: &ReviewRequest, _provider: &str) -> ScrivenerResult<String> {
        let instruction = match request.kind {
            ReviewKind::Risks => {
                "Identify the legal and practical risks in the following contract clause."
            }
            ReviewKind::Improvements => {
                "Suggest concrete improvements to the following contract clause."
            }
            ReviewKind::Completeness => {
                "Identify provisions that are missing from the following contract clause."
            }
            ReviewKind::Simplification => {
                "Rewrite the following contract clause in plainer language with the same legal effect."
            }
            ReviewKind::Ambiguities => {
                "Identify language in the following contract clause that is open to multiple readings."
            }
        };

        Ok(format!("{}\n\nClause:\n{}", instruction, request.clause))
    }
}
