//! The [`TodoStore`] trait defining the storage contract for todos.
//!
//! Every method maps to exactly one statement against the backing table.
//! Backends (InMemoryStore, SqliteStore, test fakes) are fully swappable
//! without changing the request handling logic.

use todo_core::{Todo, TodoDraft, TodoId};

use crate::error::StorageError;
use crate::types::MutationOutcome;

/// The storage contract for todos.
///
/// The trait is synchronous. Callers that need async access wrap the store
/// in an async mutex, which also serializes the calls made for one request.
pub trait TodoStore: Send {
    /// Returns every todo ordered by ascending id.
    fn list_all(&self) -> Result<Vec<Todo>, StorageError>;

    /// Fetches one todo.
    fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>, StorageError>;

    /// Inserts a new row. The backend assigns the id.
    fn insert(&mut self, draft: &TodoDraft) -> Result<MutationOutcome, StorageError>;

    /// Returns the row with the highest id, if any.
    fn most_recently_inserted(&self) -> Result<Option<Todo>, StorageError>;

    /// Whether a row with this id exists.
    fn exists_by_id(&self, id: TodoId) -> Result<bool, StorageError>;

    /// Replaces title, description and status of an existing row.
    ///
    /// Applies only if the row still exists when the statement runs; a
    /// vanished row shows up as zero affected rows, never as an error.
    fn update(&mut self, id: TodoId, draft: &TodoDraft) -> Result<MutationOutcome, StorageError>;

    /// Deletes one row.
    fn delete_by_id(&mut self, id: TodoId) -> Result<MutationOutcome, StorageError>;
}
