//! Core domain logic for TaskDeck, a single-session task tracker.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId};
pub use model::task::{Task, TaskId};
pub use model::{validate_description, ValidationError};
pub use service::view_service::{
    classify_deadline, filter_tasks, query_tasks, resolve_categories, sort_by_deadline, summarize,
    DeadlineStatus, SortDirection, TaskSummary, TaskViewQuery,
};
pub use store::snapshot::{SnapshotError, StoreSnapshot};
pub use store::{StoreError, StoreResult, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
