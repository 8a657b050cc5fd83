use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "healthy",
        "service": "storefront-backend",
        "timestamp": Utc::now(),
    });
    (StatusCode::OK, Json(body))
}
