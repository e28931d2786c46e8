// src/api/handlers/user_handler.rs

use crate::api::dto::user_dto::CreateUserRequest;
use crate::api::handlers::UuidPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use validator::Validate;

// ユーザー管理はスーパーユーザー専用

pub async fn create_user_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;
    payload.validate()?;

    let created = app_state
        .user_service
        .create_user(
            payload.username,
            payload.email,
            &payload.password,
            payload.is_superuser,
        )
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(created)))
}

pub async fn list_users_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;

    let users = app_state.user_service.list_users().await?;
    Ok(ApiResponse::success(users))
}

pub async fn get_user_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(user_id): UuidPath,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;

    let found = app_state.user_service.get_user(user_id).await?;
    Ok(ApiResponse::success(found))
}

pub fn user_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/users/{id}", get(get_user_handler))
        .with_state(app_state)
}
