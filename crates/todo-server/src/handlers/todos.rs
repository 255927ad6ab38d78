//! Todo CRUD handlers.
//!
//! Ids arrive as raw strings and bodies as raw bytes so that malformed input
//! is reported with the service's own 400 messages. Extractor rejections are
//! taken as `Result`s and converted into [`ApiError`] so that every failure
//! still carries a JSON error body.

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use todo_core::Todo;

use crate::error::ApiError;
use crate::schema::todos::DeleteTodoResponse;
use crate::state::AppState;

/// Lists all todos.
///
/// `GET /todos`
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let service = state.service.lock().await;
    Ok(Json(service.list()?))
}

/// Returns one todo.
///
/// `GET /todos/{id}`
pub async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let service = state.service.lock().await;
    Ok(Json(service.get(&id)?))
}

/// Creates a todo.
///
/// `POST /todos`
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let body = body?;
    let mut service = state.service.lock().await;
    let todo = service.create(&body)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Replaces a todo's title, description and status.
///
/// `PUT /todos/{id}`
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let body = body?;
    let mut service = state.service.lock().await;
    Ok(Json(service.update(&id, &body)?))
}

/// Deletes a todo.
///
/// `DELETE /todos/{id}`
pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteTodoResponse>, ApiError> {
    let Path(id) = id?;
    let mut service = state.service.lock().await;
    service.delete(&id)?;
    Ok(Json(DeleteTodoResponse { success: true }))
}
