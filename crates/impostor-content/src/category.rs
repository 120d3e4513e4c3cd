//! Vocabulary category type.

use impostor_core::error::GameError;
use serde::{Deserialize, Serialize};

/// A named list of vocabulary words. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier (`default-*` for built-ins, `gen-*` for generated).
    pub id: String,
    /// Display name.
    pub name: String,
    /// The word list the secret word is drawn from. Never empty.
    pub words: Vec<String>,
    /// Whether this category came from the generator rather than the
    /// built-in set.
    pub is_custom: bool,
}

impl Category {
    /// Checks the structural invariants a category must satisfy before it
    /// enters the catalog.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Validation` if the id or name is blank, the
    /// word list is empty, or any word is blank.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.id.trim().is_empty() {
            return Err(GameError::Validation("category id must not be blank".to_owned()));
        }
        if self.name.trim().is_empty() {
            return Err(GameError::Validation("category name must not be blank".to_owned()));
        }
        if self.words.is_empty() {
            return Err(GameError::Validation(format!(
                "category '{}' has no words",
                self.id
            )));
        }
        if self.words.iter().any(|w| w.trim().is_empty()) {
            return Err(GameError::Validation(format!(
                "category '{}' contains a blank word",
                self.id
            )));
        }
        Ok(())
    }
}
