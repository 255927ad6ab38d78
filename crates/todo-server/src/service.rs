//! TodoService: the single coordinator between HTTP handlers and storage.
//!
//! All request validation and storage mapping flows through [`TodoService`].
//! Handlers are thin wrappers that take the service lock and delegate here.
//! Each operation validates its inputs in a fixed order, issues one storage
//! call at a time, and turns the outcome into a value or an [`ApiError`].

use todo_core::{validate_id, Todo, TodoPayload};
use todo_storage::TodoStore;

use crate::error::ApiError;

/// Request handling over an injected [`TodoStore`].
pub struct TodoService {
    store: Box<dyn TodoStore>,
}

impl TodoService {
    /// Creates a service that persists through `store`.
    pub fn new(store: Box<dyn TodoStore>) -> Self {
        TodoService { store }
    }

    /// All todos ordered by id.
    pub fn list(&self) -> Result<Vec<Todo>, ApiError> {
        Ok(self.store.list_all()?)
    }

    /// One todo by its raw path id.
    pub fn get(&self, raw_id: &str) -> Result<Todo, ApiError> {
        let id = validate_id(raw_id)?;
        self.store.get_by_id(id)?.ok_or(ApiError::NotFound)
    }

    /// Creates a todo from a raw JSON body and returns the stored row.
    pub fn create(&mut self, body: &[u8]) -> Result<Todo, ApiError> {
        let draft = TodoPayload::from_slice(body)?.validate()?;
        self.store.insert(&draft)?;
        let created = self
            .store
            .most_recently_inserted()?
            .ok_or(ApiError::Persistence(None))?;
        tracing::info!(id = %created.id, "created todo");
        Ok(created)
    }

    /// Replaces title, description and status of an existing todo.
    ///
    /// The existence check runs after the title checks and before the
    /// description checks, so a missing row wins over a bad description.
    /// The update itself is conditional on the row still existing.
    pub fn update(&mut self, raw_id: &str, body: &[u8]) -> Result<Todo, ApiError> {
        let id = validate_id(raw_id)?;
        let payload = TodoPayload::from_slice(body)?;
        payload.validated_title()?;

        if !self.store.exists_by_id(id)? {
            return Err(ApiError::NotFound);
        }

        let draft = payload.validate()?;
        if !self.store.update(id, &draft)?.touched_any() {
            return Err(ApiError::NotFound);
        }
        let updated = self.store.get_by_id(id)?.ok_or(ApiError::NotFound)?;
        tracing::info!(%id, "updated todo");
        Ok(updated)
    }

    /// Deletes a todo. Deleting an absent id is always [`ApiError::NotFound`].
    pub fn delete(&mut self, raw_id: &str) -> Result<(), ApiError> {
        let id = validate_id(raw_id)?;
        if !self.store.delete_by_id(id)?.touched_any() {
            return Err(ApiError::NotFound);
        }
        tracing::info!(%id, "deleted todo");
        Ok(())
    }
}
