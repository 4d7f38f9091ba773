// GET /api/health — liveness check.
//
// Clients call this before uploading so they can report an unreachable
// server without sending the documents first.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "OK" })))
}
