//! Session snapshot document and restore invariants.
//!
//! # Responsibility
//! - Define the single-document serialization shape of a store session.
//! - Reject snapshots that violate store invariants instead of repairing
//!   them.
//!
//! # Invariants
//! - `next_task_id` / `next_category_id` strictly exceed every id present in
//!   their collection.
//! - Restored collections keep per-collection id uniqueness and
//!   case-insensitive category-name uniqueness.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::category::{Category, CategoryId};
use crate::model::task::{Task, TaskId};
use crate::model::ValidationError;
use crate::store::TaskStore;

/// Serializable snapshot of one store session.
///
/// The counters travel with the collections so a restored session keeps
/// allocating fresh ids; they are never re-derived from the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub categories: Vec<Category>,
    pub tasks: Vec<Task>,
    pub next_task_id: TaskId,
    pub next_category_id: CategoryId,
}

/// Reasons a snapshot is refused on restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// A counter does not strictly exceed every id in its collection;
    /// restoring it would eventually reassign a live or retired id.
    StaleCounter {
        collection: &'static str,
        next_id: u32,
        max_id: u32,
    },
    /// The same id appears twice within one collection.
    DuplicateId { collection: &'static str, id: u32 },
    /// Two categories share a description under case-insensitive comparison.
    DuplicateCategoryName(String),
    /// An entity fails its own validation.
    Validation(ValidationError),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StaleCounter {
                collection,
                next_id,
                max_id,
            } => write!(
                f,
                "{collection} counter {next_id} does not exceed existing id {max_id}"
            ),
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate id {id} in {collection}")
            }
            Self::DuplicateCategoryName(name) => {
                write!(f, "duplicate category name in snapshot: `{name}`")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for SnapshotError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl TaskStore {
    /// Captures the full session state as one serializable document.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            categories: self.categories.clone(),
            tasks: self.tasks.clone(),
            next_task_id: self.next_task_id,
            next_category_id: self.next_category_id,
        }
    }

    /// Rebuilds a store from a snapshot, checking every store invariant.
    ///
    /// This is an invariant check, not an auto-repair: a snapshot whose
    /// counters lag behind its ids, or whose collections contain duplicates
    /// or invalid entities, is rejected unchanged.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<TaskStore, SnapshotError> {
        let mut category_ids = HashSet::new();
        let mut names = HashSet::new();
        let mut max_category_id: CategoryId = 0;
        for category in &snapshot.categories {
            category.validate()?;
            if !category_ids.insert(category.id) {
                return Err(SnapshotError::DuplicateId {
                    collection: "categories",
                    id: category.id,
                });
            }
            if !names.insert(category.description.to_lowercase()) {
                return Err(SnapshotError::DuplicateCategoryName(
                    category.description.clone(),
                ));
            }
            max_category_id = max_category_id.max(category.id);
        }
        if snapshot.next_category_id <= max_category_id {
            return Err(SnapshotError::StaleCounter {
                collection: "categories",
                next_id: snapshot.next_category_id,
                max_id: max_category_id,
            });
        }

        let mut task_ids = HashSet::new();
        let mut max_task_id: TaskId = 0;
        for task in &snapshot.tasks {
            task.validate()?;
            if !task_ids.insert(task.id) {
                return Err(SnapshotError::DuplicateId {
                    collection: "tasks",
                    id: task.id,
                });
            }
            max_task_id = max_task_id.max(task.id);
        }
        if snapshot.next_task_id <= max_task_id {
            return Err(SnapshotError::StaleCounter {
                collection: "tasks",
                next_id: snapshot.next_task_id,
                max_id: max_task_id,
            });
        }

        Ok(TaskStore {
            categories: snapshot.categories,
            tasks: snapshot.tasks,
            next_category_id: snapshot.next_category_id,
            next_task_id: snapshot.next_task_id,
        })
    }
}
