use chrono::NaiveDate;
use taskdeck_core::{Category, SnapshotError, StoreSnapshot, Task, TaskStore};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn seeded_store() -> TaskStore {
    let mut store = TaskStore::new();
    let work = store.add_category("Work", "#ff0000").unwrap();
    store
        .add_task("Write report", Some(date(2024, 1, 10)), &[work])
        .unwrap();
    store
}

#[test]
fn snapshot_captures_collections_and_counters() {
    let store = seeded_store();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.categories.len(), 1);
    assert_eq!(snapshot.tasks.len(), 1);
    assert_eq!(snapshot.next_category_id, 2);
    assert_eq!(snapshot.next_task_id, 2);
}

#[test]
fn restore_resumes_id_allocation_from_the_counters() {
    let mut original = seeded_store();
    let retired = original.add_task("Soon deleted", None, &[]).unwrap();
    original.delete_task(retired);

    let mut restored = TaskStore::from_snapshot(original.snapshot()).unwrap();

    // The counter travelled with the snapshot, so the retired id stays
    // retired even though the collection no longer shows it.
    let fresh = restored.add_task("After restore", None, &[]).unwrap();
    assert_eq!(fresh, 3);
    assert_eq!(restored.list_tasks().len(), 2);
}

#[test]
fn restore_rejects_a_counter_that_does_not_exceed_existing_ids() {
    let mut snapshot = seeded_store().snapshot();
    snapshot.next_task_id = 1;

    let err = TaskStore::from_snapshot(snapshot).unwrap_err();
    assert_eq!(
        err,
        SnapshotError::StaleCounter {
            collection: "tasks",
            next_id: 1,
            max_id: 1,
        }
    );
}

#[test]
fn restore_rejects_duplicate_ids() {
    let mut snapshot = seeded_store().snapshot();
    snapshot.tasks.push(Task::new(1, "Impostor", None, &[]));
    snapshot.next_task_id = 5;

    let err = TaskStore::from_snapshot(snapshot).unwrap_err();
    assert_eq!(
        err,
        SnapshotError::DuplicateId {
            collection: "tasks",
            id: 1,
        }
    );
}

#[test]
fn restore_rejects_case_insensitive_duplicate_category_names() {
    let mut snapshot = seeded_store().snapshot();
    snapshot.categories.push(Category::new(9, "WORK", "#00ff00"));
    snapshot.next_category_id = 10;

    let err = TaskStore::from_snapshot(snapshot).unwrap_err();
    assert!(matches!(err, SnapshotError::DuplicateCategoryName(name) if name == "WORK"));
}

#[test]
fn restore_rejects_invalid_entities() {
    let mut snapshot = seeded_store().snapshot();
    snapshot.tasks.push(Task::new(4, "   ", None, &[]));
    snapshot.next_task_id = 5;

    let err = TaskStore::from_snapshot(snapshot).unwrap_err();
    assert!(matches!(err, SnapshotError::Validation(_)));
}

#[test]
fn empty_store_round_trips() {
    let restored = TaskStore::from_snapshot(TaskStore::new().snapshot()).unwrap();
    assert!(restored.list_tasks().is_empty());
    assert!(restored.list_categories().is_empty());
}

#[test]
fn snapshot_document_uses_expected_wire_fields() {
    let snapshot = seeded_store().snapshot();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json["categories"].is_array());
    assert!(json["tasks"].is_array());
    assert_eq!(json["next_task_id"], 2);
    assert_eq!(json["next_category_id"], 2);

    let decoded: StoreSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, snapshot);
}
