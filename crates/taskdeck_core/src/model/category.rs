//! Category domain model.
//!
//! # Responsibility
//! - Define the named, colored tag used to group tasks.
//!
//! # Invariants
//! - `id` is assigned once by the store and never changes.
//! - `description` is pairwise distinct across categories, case-insensitively
//!   (enforced by the store, not the entity).

use serde::{Deserialize, Serialize};

use crate::model::{validate_description, ValidationError};

/// Stable identifier for a category within one store session.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CategoryId = u32;

/// A named, colored tag usable to group tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned id, monotonically increasing, never reused.
    pub id: CategoryId,
    /// Display name; unique case-insensitively across the session.
    pub description: String,
    /// Display color (e.g. a hex string); required but not validated further.
    pub color: String,
}

impl Category {
    /// Creates a category record with the given store-assigned id.
    pub fn new(id: CategoryId, description: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            color: color.into(),
        }
    }

    /// Checks entity-level invariants before the record enters a collection.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_description(&self.description)
    }
}
