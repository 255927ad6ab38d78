//! Todo endpoint response types.

use serde::Serialize;

/// Body of a successful `DELETE /todos/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteTodoResponse {
    /// Always `true`; failures use the error body instead.
    pub success: bool,
}
