//! Task view service.
//!
//! # Responsibility
//! - Filter, order and summarize tasks for presentation callers.
//! - Derive display facts (deadline badges, counts) without touching state.
//!
//! # Invariants
//! - Every function here is pure: no I/O, no store mutation.
//! - Both sort directions place deadline-free tasks after every dated task
//!   and preserve their relative pre-sort order.

use chrono::NaiveDate;
use std::cmp::Reverse;

use crate::model::category::{Category, CategoryId};
use crate::model::task::Task;
use crate::store::TaskStore;

/// Deadline ordering requested by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Earliest deadline first.
    Ascending,
    /// Latest deadline first.
    Descending,
}

/// Display classification of a task's deadline relative to `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    /// No deadline set; no badge is shown.
    None,
    /// Deadline is strictly in the past.
    Overdue,
    /// Deadline falls on `today`.
    DueToday,
    /// Deadline is within the next three days, excluding today.
    DueSoon,
    /// Deadline is more than three days away.
    Upcoming,
}

/// Summary counts for a task list footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Combined filter + sort options for one task list view.
#[derive(Debug, Clone, Copy)]
pub struct TaskViewQuery {
    /// Single-select category restriction; `None` means all categories.
    pub category: Option<CategoryId>,
    /// When `false`, completed tasks are dropped.
    pub include_completed: bool,
    /// Optional deadline ordering; `None` keeps insertion order.
    pub sort: Option<SortDirection>,
}

impl Default for TaskViewQuery {
    fn default() -> Self {
        Self {
            category: None,
            include_completed: true,
            sort: None,
        }
    }
}

/// Filters tasks by category membership and completion state.
///
/// The two restrictions compose with AND semantics; `None` / `true` mean "no
/// restriction". Relative order is preserved.
pub fn filter_tasks(
    tasks: &[Task],
    category: Option<CategoryId>,
    include_completed: bool,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| category.map_or(true, |id| task.has_category(id)))
        .filter(|task| include_completed || !task.complete)
        .cloned()
        .collect()
}

/// Stable in-place sort by deadline.
///
/// Each direction is its own composite-key sort with its own sentinel for
/// deadline-free tasks (`NaiveDate::MAX` ascending, `NaiveDate::MIN`
/// descending behind `Reverse`). Reversing the ascending comparator instead
/// would move deadline-free tasks to the front, which must not happen.
pub fn sort_by_deadline(tasks: &mut [Task], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => tasks.sort_by_key(|task| {
            (
                task.deadline.is_none(),
                task.deadline.unwrap_or(NaiveDate::MAX),
            )
        }),
        SortDirection::Descending => tasks.sort_by_key(|task| {
            (
                task.deadline.is_none(),
                Reverse(task.deadline.unwrap_or(NaiveDate::MIN)),
            )
        }),
    }
}

/// Classifies a deadline against `today` for badge display.
pub fn classify_deadline(deadline: Option<NaiveDate>, today: NaiveDate) -> DeadlineStatus {
    let deadline = match deadline {
        Some(deadline) => deadline,
        None => return DeadlineStatus::None,
    };
    match (deadline - today).num_days() {
        days if days < 0 => DeadlineStatus::Overdue,
        0 => DeadlineStatus::DueToday,
        1..=3 => DeadlineStatus::DueSoon,
        _ => DeadlineStatus::Upcoming,
    }
}

/// Computes footer counts; `pending` is always `total - completed`.
pub fn summarize(tasks: &[Task]) -> TaskSummary {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.complete).count();
    TaskSummary {
        total,
        completed,
        pending: total - completed,
    }
}

/// Runs one view query against the store: filter, then optional sort.
pub fn query_tasks(store: &TaskStore, query: &TaskViewQuery) -> Vec<Task> {
    let mut tasks = filter_tasks(store.list_tasks(), query.category, query.include_completed);
    if let Some(direction) = query.sort {
        sort_by_deadline(&mut tasks, direction);
    }
    tasks
}

/// Resolves a task's category ids to live records for tag rendering.
///
/// Dangling ids (possible only via cascade delete) are silently skipped.
pub fn resolve_categories<'a>(store: &'a TaskStore, task: &Task) -> Vec<&'a Category> {
    task.categories
        .iter()
        .filter_map(|&id| store.get_category(id))
        .collect()
}
