//! Storage error types for todo-storage.
//!
//! The `Display` output of a [`StorageError`] is surfaced verbatim in 500
//! responses, so variants carry their own wording.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite call failed.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A backend-specific failure, reported as-is.
    #[error("{0}")]
    Backend(String),

    /// A stored row could not be decoded.
    #[error("corrupt row {id}: {reason}")]
    Corrupt { id: i64, reason: String },
}
