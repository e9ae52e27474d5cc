//! Domain model for tasks and categories.
//!
//! # Responsibility
//! - Define the structured records owned by the store.
//! - Provide entity-level validation used by store write paths.
//!
//! # Invariants
//! - Ids are plain integers assigned by the store, monotonically from 1.
//! - A blank description is never valid for either entity kind.

pub mod category;
pub mod task;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Entity validation failure shared by category and task write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Description is empty or whitespace-only.
    BlankDescription,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankDescription => write!(f, "description must not be blank"),
        }
    }
}

impl Error for ValidationError {}

/// Rejects empty or whitespace-only descriptions.
///
/// Exposed so presentation boundaries can run the same check before calling
/// into the store; the store runs it again on every write path.
pub fn validate_description(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::BlankDescription);
    }
    Ok(())
}
