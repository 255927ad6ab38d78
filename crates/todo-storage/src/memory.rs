//! In-memory implementation of [`TodoStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and for servers
//! started without a database file. It keeps rows in a `BTreeMap` so listing
//! is naturally ordered by id, and hands out ids from a counter that never
//! goes backwards, matching SQLite's `AUTOINCREMENT`.

use std::collections::BTreeMap;

use todo_core::{Todo, TodoDraft, TodoId};

use crate::error::StorageError;
use crate::traits::TodoStore;
use crate::types::MutationOutcome;

/// Ordered in-memory todo table.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    rows: BTreeMap<TodoId, Todo>,
    next_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore for InMemoryStore {
    fn list_all(&self) -> Result<Vec<Todo>, StorageError> {
        Ok(self.rows.values().cloned().collect())
    }

    fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>, StorageError> {
        Ok(self.rows.get(&id).cloned())
    }

    fn insert(&mut self, draft: &TodoDraft) -> Result<MutationOutcome, StorageError> {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.rows.insert(
            id,
            Todo {
                id,
                title: draft.title.clone(),
                description: draft.description.clone(),
                status: draft.status,
            },
        );
        Ok(MutationOutcome {
            rows_affected: Some(1),
            last_insert_id: Some(id),
        })
    }

    fn most_recently_inserted(&self) -> Result<Option<Todo>, StorageError> {
        Ok(self.rows.values().next_back().cloned())
    }

    fn exists_by_id(&self, id: TodoId) -> Result<bool, StorageError> {
        Ok(self.rows.contains_key(&id))
    }

    fn update(&mut self, id: TodoId, draft: &TodoDraft) -> Result<MutationOutcome, StorageError> {
        let Some(row) = self.rows.get_mut(&id) else {
            return Ok(MutationOutcome::rows(0));
        };
        row.title = draft.title.clone();
        row.description = draft.description.clone();
        row.status = draft.status;
        Ok(MutationOutcome::rows(1))
    }

    fn delete_by_id(&mut self, id: TodoId) -> Result<MutationOutcome, StorageError> {
        let removed = self.rows.remove(&id).is_some();
        Ok(MutationOutcome::rows(u64::from(removed)))
    }
}
