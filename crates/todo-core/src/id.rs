//! Identifier newtype for persisted todos.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a stored todo.
///
/// Assigned by the storage backend on insert. The inner `i64` aligns with
/// SQLite's `INTEGER PRIMARY KEY`; valid ids are always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
