mod sheet;

pub use sheet::{generate_sheet, SheetRequest};

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness endpoint (no auth, no state).
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
