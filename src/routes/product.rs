use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use serde_json::json;
use tracing::info;
use validator::Validate;

use crate::{
    dto::product_dto::{CreateProductPayload, ProductResponse},
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductPayload,
    responses(
        (status = 200, description = "Product created successfully", body = Json<ProductResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let product = state.product_service.create(payload).await?;
    info!(name = %product.name, "product created");
    Ok(Json(ProductResponse::from(product)))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List of available products", body = Json<Vec<ProductResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let products = state.product_service.list_available().await?;
    let items: Vec<ProductResponse> = products.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Json<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
#[axum::debug_handler]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let product = state
        .product_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Producto no encontrado".to_string()))?;
    Ok(Json(ProductResponse::from(product)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = CreateProductPayload,
    responses(
        (status = 200, description = "Product updated successfully", body = Json<ProductResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Product not found")
    )
)]
#[axum::debug_handler]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let product = state
        .product_service
        .update(id, payload)
        .await?
        .ok_or_else(|| Error::NotFound("Producto no encontrado".to_string()))?;
    info!(id = product.id, "product updated");
    Ok(Json(ProductResponse::from(product)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product soft-deleted"),
        (status = 404, description = "Product not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let deleted = state.product_service.soft_delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Producto no encontrado".to_string()));
    }
    info!(id = id, "product soft-deleted");
    Ok(Json(json!({ "message": "Producto eliminado correctamente" })))
}
