//! Result metadata for write operations.

use todo_core::TodoId;

/// What a write statement reported back.
///
/// Backends that cannot report a row count leave `rows_affected` as `None`;
/// callers must treat that the same as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Rows touched by the statement, when the backend knows.
    pub rows_affected: Option<u64>,
    /// Id assigned by an insert, when the backend knows.
    pub last_insert_id: Option<TodoId>,
}

impl MutationOutcome {
    /// An outcome with a known row count and no insert id.
    pub fn rows(count: u64) -> Self {
        MutationOutcome {
            rows_affected: Some(count),
            last_insert_id: None,
        }
    }

    /// True only if the backend reported at least one affected row.
    pub fn touched_any(&self) -> bool {
        matches!(self.rows_affected, Some(n) if n > 0)
    }
}
