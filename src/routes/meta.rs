use axum::response::{IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::dto::status_dto::DataResponse;

const API_VERSION: &str = env!("CARGO_PKG_VERSION");

#[axum::debug_handler]
pub async fn get_data() -> impl IntoResponse {
    Json(DataResponse {
        message: "Storefront backend API, three-tier architecture".to_string(),
        version: API_VERSION.to_string(),
        status: "running".to_string(),
        timestamp: Utc::now(),
    })
}

#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    let body = json!({
        "service": "storefront-backend",
        "architecture": "3-tier (api, services, database)",
        "version": API_VERSION,
        "health": "/health",
    });
    Json(body)
}
