//! Behaviour every [`TodoStore`] backend must share.
//!
//! Each backend's test module calls [`run_all`] on a fresh, empty store.

use todo_core::{Status, TodoDraft, TodoId};

use crate::traits::TodoStore;

fn draft(title: &str, description: Option<&str>, status: Status) -> TodoDraft {
    TodoDraft {
        title: title.to_string(),
        description: description.map(str::to_string),
        status,
    }
}

pub(crate) fn run_all(store: &mut dyn TodoStore) {
    empty_store(store);
    insert_then_fetch(store);
    list_is_ordered_by_id(store);
    update_replaces_fields(store);
    update_missing_row_touches_nothing(store);
    delete_is_not_repeatable(store);
    ids_are_never_reused(store);
}

fn empty_store(store: &mut dyn TodoStore) {
    assert!(store.list_all().unwrap().is_empty());
    assert!(store.most_recently_inserted().unwrap().is_none());
    assert!(store.get_by_id(TodoId(1)).unwrap().is_none());
    assert!(!store.exists_by_id(TodoId(1)).unwrap());
}

fn insert_then_fetch(store: &mut dyn TodoStore) {
    let outcome = store
        .insert(&draft("Buy milk", Some("2 litres"), Status::InProgress))
        .unwrap();
    assert_eq!(outcome.rows_affected, Some(1));
    let id = outcome.last_insert_id.expect("insert reports its id");

    let latest = store.most_recently_inserted().unwrap().unwrap();
    assert_eq!(latest.id, id);
    assert_eq!(latest.title, "Buy milk");
    assert_eq!(latest.description.as_deref(), Some("2 litres"));
    assert_eq!(latest.status, Status::InProgress);

    assert_eq!(store.get_by_id(id).unwrap(), Some(latest));
    assert!(store.exists_by_id(id).unwrap());
}

fn list_is_ordered_by_id(store: &mut dyn TodoStore) {
    store.insert(&draft("second", None, Status::Complete)).unwrap();
    store.insert(&draft("third", None, Status::Archived)).unwrap();
    let all = store.list_all().unwrap();
    let ids: Vec<i64> = all.iter().map(|t| t.id.0).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(all.last().unwrap().title, "third");
}

fn update_replaces_fields(store: &mut dyn TodoStore) {
    let id = store.most_recently_inserted().unwrap().unwrap().id;
    let outcome = store
        .update(id, &draft("renamed", Some("now described"), Status::Complete))
        .unwrap();
    assert!(outcome.touched_any());

    let row = store.get_by_id(id).unwrap().unwrap();
    assert_eq!(row.title, "renamed");
    assert_eq!(row.description.as_deref(), Some("now described"));
    assert_eq!(row.status, Status::Complete);

    // Full replace: a missing description clears the old one.
    store
        .update(id, &draft("renamed", None, Status::Complete))
        .unwrap();
    assert_eq!(store.get_by_id(id).unwrap().unwrap().description, None);
}

fn update_missing_row_touches_nothing(store: &mut dyn TodoStore) {
    let outcome = store
        .update(TodoId(9_999), &draft("ghost", None, Status::Incomplete))
        .unwrap();
    assert_eq!(outcome.rows_affected, Some(0));
    assert!(store.get_by_id(TodoId(9_999)).unwrap().is_none());
}

fn delete_is_not_repeatable(store: &mut dyn TodoStore) {
    let id = store.most_recently_inserted().unwrap().unwrap().id;
    assert!(store.delete_by_id(id).unwrap().touched_any());
    assert!(!store.delete_by_id(id).unwrap().touched_any());
    assert!(!store.exists_by_id(id).unwrap());
}

fn ids_are_never_reused(store: &mut dyn TodoStore) {
    let before = store
        .list_all()
        .unwrap()
        .iter()
        .map(|t| t.id)
        .max()
        .unwrap();
    let removed = store
        .insert(&draft("temp", None, Status::Incomplete))
        .unwrap()
        .last_insert_id
        .unwrap();
    assert!(removed > before);
    store.delete_by_id(removed).unwrap();
    let next = store
        .insert(&draft("after", None, Status::Incomplete))
        .unwrap()
        .last_insert_id
        .unwrap();
    assert!(next > removed);
}
