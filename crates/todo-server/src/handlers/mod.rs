//! HTTP handler modules for the todo API.
//!
//! Handlers extract raw path segments and bodies, acquire the service lock,
//! delegate to [`crate::service::TodoService`], and wrap the result in JSON.
//! No validation lives in handlers.

pub mod health;
pub mod todos;

use crate::error::ApiError;

/// Fallback for any method and path without a route.
pub async fn route_not_matched() -> ApiError {
    ApiError::RouteNotMatched
}
