//! SQLite implementation of [`TodoStore`].
//!
//! [`SqliteStore`] persists todos in a single `todos` table with WAL mode and
//! automatic schema migrations. Ids come from `AUTOINCREMENT`, so an id is
//! never handed out twice, even after the row is deleted.

use rusqlite::{params, Connection, OptionalExtension, Row};

use todo_core::{Status, Todo, TodoDraft, TodoId};

use crate::error::StorageError;
use crate::schema::{self, Location};
use crate::traits::TodoStore;
use crate::types::MutationOutcome;

const SELECT_COLUMNS: &str = "SELECT id, title, description, status FROM todos";

/// SQLite-backed implementation of [`TodoStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = schema::open(Location::File(path))?;
        tracing::debug!(path, "opened todo database");
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = schema::open(Location::Memory)?;
        Ok(SqliteStore { conn })
    }

    /// Runs a single-row query built from [`SELECT_COLUMNS`].
    fn query_one(
        &self,
        tail: &str,
        params: impl rusqlite::Params,
    ) -> Result<Option<Todo>, StorageError> {
        let sql = format!("{SELECT_COLUMNS} {tail}");
        let raw = self
            .conn
            .prepare_cached(&sql)?
            .query_row(params, RawRow::from_row)
            .optional()?;
        raw.map(RawRow::into_todo).transpose()
    }
}

/// Columns as read from SQLite, before status decoding.
struct RawRow {
    id: i64,
    title: String,
    description: Option<String>,
    status: String,
}

impl RawRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(RawRow {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            status: row.get(3)?,
        })
    }

    fn into_todo(self) -> Result<Todo, StorageError> {
        let status = Status::parse(&self.status).ok_or_else(|| StorageError::Corrupt {
            id: self.id,
            reason: format!("unknown status '{}'", self.status),
        })?;
        Ok(Todo {
            id: TodoId(self.id),
            title: self.title,
            description: self.description,
            status,
        })
    }
}

impl TodoStore for SqliteStore {
    fn list_all(&self) -> Result<Vec<Todo>, StorageError> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY id");
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map([], RawRow::from_row)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?.into_todo()?);
        }
        Ok(result)
    }

    fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>, StorageError> {
        self.query_one("WHERE id = ?1", params![id.0])
    }

    fn insert(&mut self, draft: &TodoDraft) -> Result<MutationOutcome, StorageError> {
        let affected = self.conn.execute(
            "INSERT INTO todos (title, description, status) VALUES (?1, ?2, ?3)",
            params![draft.title, draft.description, draft.status.as_str()],
        )?;
        Ok(MutationOutcome {
            rows_affected: Some(affected as u64),
            last_insert_id: Some(TodoId(self.conn.last_insert_rowid())),
        })
    }

    fn most_recently_inserted(&self) -> Result<Option<Todo>, StorageError> {
        self.query_one("ORDER BY id DESC LIMIT 1", [])
    }

    fn exists_by_id(&self, id: TodoId) -> Result<bool, StorageError> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM todos WHERE id = ?1)",
            params![id.0],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn update(&mut self, id: TodoId, draft: &TodoDraft) -> Result<MutationOutcome, StorageError> {
        let affected = self.conn.execute(
            "UPDATE todos SET title = ?1, description = ?2, status = ?3 WHERE id = ?4",
            params![draft.title, draft.description, draft.status.as_str(), id.0],
        )?;
        Ok(MutationOutcome::rows(affected as u64))
    }

    fn delete_by_id(&mut self, id: TodoId) -> Result<MutationOutcome, StorageError> {
        let affected = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id.0])?;
        Ok(MutationOutcome::rows(affected as u64))
    }
}
