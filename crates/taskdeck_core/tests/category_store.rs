use taskdeck_core::{StoreError, TaskStore, ValidationError};

#[test]
fn add_assigns_monotonic_ids_starting_at_one() {
    let mut store = TaskStore::new();

    let first = store.add_category("Work", "#ff0000").unwrap();
    let second = store.add_category("Home", "#00ff00").unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(store.list_categories().len(), 2);
}

#[test]
fn duplicate_name_is_rejected_case_insensitively() {
    let mut store = TaskStore::new();
    store.add_category("Work", "#ff0000").unwrap();

    let err = store.add_category("work", "#00ff00").unwrap_err();
    assert!(matches!(err, StoreError::DuplicateName(name) if name == "work"));
    assert_eq!(store.list_categories().len(), 1);
}

#[test]
fn rejected_add_does_not_consume_an_id() {
    let mut store = TaskStore::new();
    store.add_category("Work", "#ff0000").unwrap();
    store.add_category("WORK", "#00ff00").unwrap_err();

    let next = store.add_category("Errands", "#0000ff").unwrap();
    assert_eq!(next, 2);
}

#[test]
fn blank_description_is_rejected() {
    let mut store = TaskStore::new();

    let err = store.add_category("   ", "#ff0000").unwrap_err();
    assert_eq!(
        err,
        StoreError::Validation(ValidationError::BlankDescription)
    );
    assert!(store.list_categories().is_empty());
}

#[test]
fn edit_updates_description_and_color_in_place() {
    let mut store = TaskStore::new();
    let id = store.add_category("Work", "#ff0000").unwrap();

    store.edit_category(id, "Office", "#123456").unwrap();

    let category = store.get_category(id).unwrap();
    assert_eq!(category.id, id);
    assert_eq!(category.description, "Office");
    assert_eq!(category.color, "#123456");
}

#[test]
fn edit_rejects_name_held_by_another_category() {
    let mut store = TaskStore::new();
    store.add_category("Work", "#ff0000").unwrap();
    let home = store.add_category("Home", "#00ff00").unwrap();

    let err = store.edit_category(home, "WORK", "#00ff00").unwrap_err();
    assert!(matches!(err, StoreError::DuplicateName(_)));
    assert_eq!(store.get_category(home).unwrap().description, "Home");
}

#[test]
fn edit_allows_a_category_to_keep_its_own_name() {
    let mut store = TaskStore::new();
    let id = store.add_category("Work", "#ff0000").unwrap();

    // Case-only rename of the same id is not a collision.
    store.edit_category(id, "WORK", "#abcdef").unwrap();
    assert_eq!(store.get_category(id).unwrap().description, "WORK");
}

#[test]
fn edit_missing_id_returns_not_found() {
    let mut store = TaskStore::new();

    let err = store.edit_category(42, "Anything", "#ffffff").unwrap_err();
    assert!(matches!(err, StoreError::CategoryNotFound(42)));
}

#[test]
fn delete_cascades_into_task_category_sets() {
    let mut store = TaskStore::new();
    let work = store.add_category("Work", "#ff0000").unwrap();
    let home = store.add_category("Home", "#00ff00").unwrap();
    let task = store.add_task("Write report", None, &[work, home]).unwrap();

    store.delete_category(work);

    assert!(store.get_category(work).is_none());
    let categories = &store.get_task(task).unwrap().categories;
    assert_eq!(categories, &vec![home]);
}

#[test]
fn delete_cascade_can_empty_a_task_category_set() {
    let mut store = TaskStore::new();
    let work = store.add_category("Work", "#ff0000").unwrap();
    let task = store.add_task("Write report", None, &[work]).unwrap();

    store.delete_category(work);

    assert!(store.get_task(task).unwrap().categories.is_empty());
}

#[test]
fn delete_is_idempotent_and_never_fails() {
    let mut store = TaskStore::new();
    let id = store.add_category("Work", "#ff0000").unwrap();

    store.delete_category(id);
    store.delete_category(id);
    store.delete_category(99);

    assert!(store.list_categories().is_empty());
}

#[test]
fn ids_are_never_reused_after_deletion() {
    let mut store = TaskStore::new();
    store.add_category("Work", "#ff0000").unwrap();
    let second = store.add_category("Home", "#00ff00").unwrap();

    store.delete_category(second);
    let third = store.add_category("Errands", "#0000ff").unwrap();

    assert_eq!(third, 3);
}

#[test]
fn deleted_name_becomes_available_again() {
    let mut store = TaskStore::new();
    let id = store.add_category("Work", "#ff0000").unwrap();
    store.delete_category(id);

    let reborn = store.add_category("Work", "#00ff00").unwrap();
    assert_eq!(reborn, 2);
}

#[test]
fn find_category_by_name_ignores_case() {
    let mut store = TaskStore::new();
    let id = store.add_category("Work", "#ff0000").unwrap();

    assert_eq!(store.find_category_by_name("wOrK").unwrap().id, id);
    assert!(store.find_category_by_name("Home").is_none());
}
