// src/api/handlers/auth_handler.rs

use crate::api::dto::auth_dto::{ScopeSummaryResponse, SigninRequest, SigninResponse};
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use validator::Validate;

pub async fn signin_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<SigninRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let result = app_state
        .auth_service
        .signin(&payload.username, &payload.password)
        .await?;

    Ok(ApiResponse::success(SigninResponse {
        access_token: result.access_token,
        user: result.user,
    }))
}

pub async fn me_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<impl IntoResponse> {
    let current_user = app_state.auth_service.current_user(user.user_id()).await?;
    Ok(ApiResponse::success(current_user))
}

/// 現在のユーザーの解決済みアクセススコープ
pub async fn my_scope_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let access = &app_state.access_control_service;

    let scopes = access.scopes(&context).await?;
    let access_level = scopes.access_level();

    let mut organizations: Vec<_> = access
        .accessible_organizations(&context)
        .await?
        .into_iter()
        .collect();
    let mut subdivisions: Vec<_> = access
        .accessible_subdivisions(&context)
        .await?
        .into_iter()
        .collect();
    let mut departments: Vec<_> = access
        .accessible_departments(&context)
        .await?
        .into_iter()
        .collect();

    organizations.sort();
    subdivisions.sort();
    departments.sort();

    Ok(ApiResponse::success(ScopeSummaryResponse {
        access_level,
        organizations,
        subdivisions,
        departments,
    }))
}

pub fn auth_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/signin", post(signin_handler))
        .route("/auth/me", get(me_handler))
        .route("/auth/me/scope", get(my_scope_handler))
        .with_state(app_state)
}
