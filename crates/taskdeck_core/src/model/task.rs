//! Task domain model.
//!
//! # Responsibility
//! - Define the user-visible to-do record and its lifecycle helpers.
//!
//! # Invariants
//! - `id` is assigned once by the store and never changes.
//! - `categories` has set semantics: no duplicate ids; insertion order is
//!   preserved but carries no meaning.
//! - An absent `deadline` means "no deadline", not "unknown".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::category::CategoryId;
use crate::model::{validate_description, ValidationError};

/// Stable identifier for a task within one store session.
pub type TaskId = u32;

/// A user-created to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned id, monotonically increasing, never reused.
    pub id: TaskId,
    /// What needs doing; never blank once stored.
    pub description: String,
    /// Optional due date, day precision only.
    pub deadline: Option<NaiveDate>,
    /// Referenced category ids. Dangling ids can only arise transiently via
    /// the store's cascade-delete path and are tolerated by readers.
    pub categories: Vec<CategoryId>,
    /// Completion flag; independent of every other field.
    pub complete: bool,
}

impl Task {
    /// Creates a task record with the given store-assigned id.
    ///
    /// Duplicate category ids are dropped, keeping the first occurrence.
    /// `complete` starts as `false`.
    pub fn new(
        id: TaskId,
        description: impl Into<String>,
        deadline: Option<NaiveDate>,
        category_ids: &[CategoryId],
    ) -> Self {
        Self {
            id,
            description: description.into(),
            deadline,
            categories: dedup_ids(category_ids),
            complete: false,
        }
    }

    /// Checks entity-level invariants before the record enters a collection.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_description(&self.description)
    }

    /// Returns whether this task is tagged with the given category.
    pub fn has_category(&self, id: CategoryId) -> bool {
        self.categories.contains(&id)
    }

    /// Replaces the category set, dropping duplicate ids.
    pub fn set_categories(&mut self, category_ids: &[CategoryId]) {
        self.categories = dedup_ids(category_ids);
    }

    /// Removes one category reference if present; used by cascade delete.
    ///
    /// Returns whether the task actually referenced the category.
    pub fn detach_category(&mut self, id: CategoryId) -> bool {
        let before = self.categories.len();
        self.categories.retain(|&existing| existing != id);
        self.categories.len() < before
    }
}

// Linear scan keeps first-occurrence order; category sets are tiny.
fn dedup_ids(ids: &[CategoryId]) -> Vec<CategoryId> {
    let mut unique = Vec::with_capacity(ids.len());
    for &id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
