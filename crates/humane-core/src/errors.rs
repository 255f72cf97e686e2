//! Cross-cutting error types for Humane.
//!
//! Domain-specific errors (e.g., `BackupError`, `ConfigError`) are defined in
//! their respective crates. Date failures live in [`crate::dates::DateError`]
//! because every aggregate propagates them unchanged.

use thiserror::Error;

use crate::dates::DateError;

/// Errors that can be raised by any Humane crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A stored or user-supplied date could not be interpreted.
    #[error(transparent)]
    Date(#[from] DateError),
}

impl CoreError {
    /// Shorthand for a missing habit.
    #[must_use]
    pub fn habit_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "habit".to_string(),
            id: id.to_string(),
        }
    }
}
