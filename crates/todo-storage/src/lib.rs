//! Persistence for todos.
//!
//! Provides the [`TodoStore`] trait defining the storage contract that the
//! HTTP layer is written against, plus the [`InMemoryStore`] and
//! [`SqliteStore`] as first-class backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: MutationOutcome returned by write operations
//! - [`traits`]: TodoStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: migration setup and connection pragmas
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

#[cfg(test)]
mod contract;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::TodoStore;
pub use types::MutationOutcome;
