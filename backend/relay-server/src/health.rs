use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET /ping - Liveness probe
pub async fn ping() -> Response {
    (StatusCode::OK, Json(json!({ "ok": true }))).into_response()
}
