//! Liveness check.

use axum::Json;

use crate::schema::common::HealthResponse;

/// `GET /`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
