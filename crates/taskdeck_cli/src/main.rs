//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use taskdeck_core::{
    classify_deadline, query_tasks, summarize, SortDirection, TaskStore, TaskViewQuery,
};

fn main() {
    println!("taskdeck_core ping={}", taskdeck_core::ping());
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    // Fixed dates keep the probe output stable across runs.
    let today = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid probe date");
    let report_due = NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid probe date");

    let mut store = TaskStore::new();
    let work = store
        .add_category("Work", "#1f77b4")
        .expect("fresh store has no duplicate names");
    store
        .add_task("Write report", Some(report_due), &[work])
        .expect("non-blank description");
    store
        .add_task("Tidy backlog", None, &[])
        .expect("non-blank description");

    let query = TaskViewQuery {
        sort: Some(SortDirection::Ascending),
        ..TaskViewQuery::default()
    };
    for task in query_tasks(&store, &query) {
        println!(
            "task id={} deadline_status={:?}",
            task.id,
            classify_deadline(task.deadline, today)
        );
    }

    let summary = summarize(store.list_tasks());
    println!(
        "summary total={} completed={} pending={}",
        summary.total, summary.completed, summary.pending
    );
}
