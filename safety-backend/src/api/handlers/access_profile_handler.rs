// src/api/handlers/access_profile_handler.rs

use crate::api::dto::access_profile_dto::{
    ProfileGrantsResponse, ReplaceGrantsRequest, SetProfileActiveRequest,
};
use crate::api::handlers::UuidPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::{get, patch, put},
    Router,
};

// 付与・剥奪はスーパーユーザー専用（プロファイルは自動導出されない）

pub async fn get_grants_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(user_id): UuidPath,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;

    let grants = app_state.access_profile_service.get_grants(user_id).await?;
    Ok(ApiResponse::success(ProfileGrantsResponse::from(grants)))
}

pub async fn replace_grants_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(user_id): UuidPath,
    Json(payload): Json<ReplaceGrantsRequest>,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;

    let grants = app_state
        .access_profile_service
        .replace_grants(
            user_id,
            payload.organizations.into_iter().collect(),
            payload.subdivisions.into_iter().collect(),
            payload.departments.into_iter().collect(),
        )
        .await?;

    Ok(ApiResponse::success(ProfileGrantsResponse::from(grants)))
}

pub async fn set_profile_active_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(user_id): UuidPath,
    Json(payload): Json<SetProfileActiveRequest>,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;

    let grants = app_state
        .access_profile_service
        .set_active(user_id, payload.is_active)
        .await?;

    Ok(ApiResponse::success(ProfileGrantsResponse::from(grants)))
}

pub fn access_profile_router(app_state: AppState) -> Router {
    Router::new()
        .route("/access-profiles/{user_id}", get(get_grants_handler))
        .route(
            "/access-profiles/{user_id}/grants",
            put(replace_grants_handler),
        )
        .route(
            "/access-profiles/{user_id}/active",
            patch(set_profile_active_handler),
        )
        .with_state(app_state)
}
