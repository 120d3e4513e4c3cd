//! Domain error types.

use thiserror::Error;

/// Top-level game error type.
///
/// No variant is fatal: every failure leaves the round in its current
/// phase so the user can retry.
#[derive(Debug, Error)]
pub enum GameError {
    /// A category ID did not resolve against the available catalog.
    /// Signals a caller bug — the category list and selector drifted apart.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A replay was requested before any round had a category.
    #[error("no category selected")]
    NoCategorySelected,

    /// A validation error in domain logic or setup input.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure error (poisoned lock, malformed embedded asset).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
