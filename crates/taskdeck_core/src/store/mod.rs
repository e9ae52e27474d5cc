//! In-memory task and category store.
//!
//! # Responsibility
//! - Own both entity collections and their id counters for one session.
//! - Enforce uniqueness and referential-integrity invariants on every write.
//!
//! # Invariants
//! - Write paths validate entities before mutating a collection.
//! - Ids come from per-collection counters, never from collection length, so
//!   deleted ids are never reassigned.
//! - Category descriptions stay pairwise distinct, case-insensitively.
//! - Deleting a category removes its id from every task in the same step.

pub mod snapshot;

use chrono::NaiveDate;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::category::{Category, CategoryId};
use crate::model::task::{Task, TaskId};
use crate::model::{validate_description, ValidationError};

pub type StoreResult<T> = Result<T, StoreError>;

/// Expected failure outcomes of store commands.
///
/// These are ordinary result values; callers re-prompt the user rather than
/// treating any of them as fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Another category already holds this description (case-insensitive).
    DuplicateName(String),
    /// No category with this id exists.
    CategoryNotFound(CategoryId),
    /// No task with this id exists.
    TaskNotFound(TaskId),
    /// Entity-level validation rejected the input.
    Validation(ValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "category name already in use: `{name}`"),
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Authoritative owner of all task/category state for one session.
///
/// The caller owns the instance (one per session); every mutation goes
/// through `&mut self`, which keeps the single-writer rule compile-checked.
/// Lookups and name-collision checks are linear scans; collections stay small
/// enough that no index is warranted.
#[derive(Debug)]
pub struct TaskStore {
    categories: Vec<Category>,
    tasks: Vec<Task>,
    next_category_id: CategoryId,
    next_task_id: TaskId,
}

impl TaskStore {
    /// Creates an empty store; both id counters start at 1.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            tasks: Vec::new(),
            next_category_id: 1,
            next_task_id: 1,
        }
    }

    /// Adds a category, allocating the next category id.
    ///
    /// Fails with `DuplicateName` when another category already holds the
    /// description under case-insensitive comparison; the candidate id is not
    /// consumed in that case.
    pub fn add_category(&mut self, description: &str, color: &str) -> StoreResult<CategoryId> {
        let category = Category::new(self.next_category_id, description, color);
        category.validate()?;

        if self.find_category_by_name(description).is_some() {
            return Err(StoreError::DuplicateName(description.to_string()));
        }

        let id = category.id;
        self.categories.push(category);
        self.next_category_id += 1;
        info!("event=category_added module=store id={id}");
        Ok(id)
    }

    /// Updates a category's description and color in place; the id never
    /// changes.
    ///
    /// The duplicate-name check runs before the existence check, so renaming
    /// a missing id to a taken name reports `DuplicateName`. A category may
    /// always keep its own name (including case-only changes).
    pub fn edit_category(
        &mut self,
        id: CategoryId,
        description: &str,
        color: &str,
    ) -> StoreResult<()> {
        validate_description(description)?;

        let needle = description.to_lowercase();
        if self
            .categories
            .iter()
            .any(|category| category.id != id && category.description.to_lowercase() == needle)
        {
            return Err(StoreError::DuplicateName(description.to_string()));
        }

        let category = self
            .categories
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or(StoreError::CategoryNotFound(id))?;
        category.description = description.to_string();
        category.color = color.to_string();
        debug!("event=category_edited module=store id={id}");
        Ok(())
    }

    /// Deletes a category and removes its id from every task's category set.
    ///
    /// Total and idempotent: deleting an unknown id is a no-op.
    pub fn delete_category(&mut self, id: CategoryId) {
        let before = self.categories.len();
        self.categories.retain(|category| category.id != id);
        if self.categories.len() == before {
            return;
        }

        let mut detached = 0usize;
        for task in &mut self.tasks {
            if task.detach_category(id) {
                detached += 1;
            }
        }
        info!("event=category_deleted module=store id={id} detached_tasks={detached}");
    }

    /// Adds a task, allocating the next task id.
    ///
    /// Duplicate category ids are dropped; `complete` starts `false`.
    pub fn add_task(
        &mut self,
        description: &str,
        deadline: Option<NaiveDate>,
        category_ids: &[CategoryId],
    ) -> StoreResult<TaskId> {
        let task = Task::new(self.next_task_id, description, deadline, category_ids);
        task.validate()?;

        let id = task.id;
        self.tasks.push(task);
        self.next_task_id += 1;
        info!("event=task_added module=store id={id}");
        Ok(id)
    }

    /// Replaces a task's description, deadline and category set.
    pub fn edit_task(
        &mut self,
        id: TaskId,
        description: &str,
        deadline: Option<NaiveDate>,
        category_ids: &[CategoryId],
    ) -> StoreResult<()> {
        validate_description(description)?;

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.description = description.to_string();
        task.deadline = deadline;
        task.set_categories(category_ids);
        debug!("event=task_edited module=store id={id}");
        Ok(())
    }

    /// Marks a task complete or incomplete, independent of other edits.
    pub fn set_task_complete(&mut self, id: TaskId, complete: bool) -> StoreResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.complete = complete;
        debug!("event=task_completion_set module=store id={id} complete={complete}");
        Ok(())
    }

    /// Deletes a task. Total and idempotent: unknown ids are a no-op.
    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() < before {
            info!("event=task_deleted module=store id={id}");
        }
    }

    /// Point lookup; absence is a normal (non-error) result.
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Point lookup; absence is a normal (non-error) result.
    pub fn get_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Case-insensitive lookup by display name.
    pub fn find_category_by_name(&self, name: &str) -> Option<&Category> {
        let needle = name.to_lowercase();
        self.categories
            .iter()
            .find(|category| category.description.to_lowercase() == needle)
    }

    /// All tasks in insertion order.
    pub fn list_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All categories in insertion order.
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
