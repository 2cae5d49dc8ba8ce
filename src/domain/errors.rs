//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A score outside the range its scale allows (mMRC 0-4, CAT 0-40).
    #[error("{scale} score {value} is out of range (0-{max})")]
    ScoreOutOfRange {
        scale: &'static str,
        value: u32,
        max: u8,
    },

    #[error("Unknown exacerbation category: {0}")]
    UnknownExacerbationLevel(String),

    #[error("Unknown medication class: {0}")]
    UnknownGlossaryTerm(String),

    #[error("Unknown severity group: {0}")]
    UnknownGroup(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Render failed: {0}")]
    Render(String),
}
