//! Liveness probe.

use axum::Json;

use crate::models::HealthResponse;

/// `GET /healthz`
pub async fn healthz_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
