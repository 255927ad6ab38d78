//! Application state with a shared `TodoService`.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. `tokio::sync::Mutex` lets handlers await the lock without
//! blocking the runtime, and `rusqlite::Connection` is `!Sync`, which rules
//! out an `RwLock`.
//!
//! A handler holds the lock for the whole request, so inside one process the
//! storage calls of two requests never interleave.

use std::sync::Arc;

use todo_storage::{InMemoryStore, SqliteStore, TodoStore};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::service::TodoService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared todo service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<TodoService>>,
}

impl AppState {
    /// Creates a new `AppState` backed by the SQLite database at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path)?;
        Ok(Self::with_store(Box::new(store)))
    }

    /// Creates a new `AppState` with an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(Box::new(InMemoryStore::new()))
    }

    /// Creates a new `AppState` around any store, such as a test fake.
    pub fn with_store(store: Box<dyn TodoStore>) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(TodoService::new(store))),
        }
    }

    /// Picks the backend named by the configuration.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ApiError> {
        if config.uses_memory() {
            tracing::warn!("TODO_DB_PATH is :memory:, todos will not survive a restart");
            return Ok(Self::in_memory());
        }
        Self::new(&config.db_path)
    }
}
