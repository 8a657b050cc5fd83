use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use tracing::info;
use validator::Validate;

use crate::{
    dto::user_dto::{CreateUserPayload, UserResponse},
    error::{Error, Result},
    services::user_service::UserCreation,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserPayload,
    responses(
        (status = 200, description = "User created successfully", body = Json<UserResponse>),
        (status = 400, description = "Username or email already taken")
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    match state.user_service.create(payload).await? {
        UserCreation::Created(user) => {
            info!(username = %user.username, "user created");
            Ok(Json(UserResponse::from(user)))
        }
        UserCreation::DuplicateIdentity => {
            Err(Error::BadRequest("Usuario o email ya existe".to_string()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Json<Vec<UserResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list().await?;
    let items: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = Json<UserResponse>),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let user = state
        .user_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Usuario no encontrado".to_string()))?;
    Ok(Json(UserResponse::from(user)))
}
