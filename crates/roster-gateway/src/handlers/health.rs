use crate::model::HealthResponse;
use axum::Json;

/// Liveness probe, also reporting the running gateway version.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
