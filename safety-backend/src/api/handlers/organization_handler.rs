// src/api/handlers/organization_handler.rs

use crate::api::dto::organization_dto::{CreateOrganizationRequest, UpdateOrganizationRequest};
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

pub async fn list_organizations_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let organizations = app_state
        .organization_service
        .list_organizations(&context)
        .await?;

    Ok(ApiResponse::success(organizations))
}

pub async fn get_organization_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let organization = app_state
        .organization_service
        .get_organization(&context, id)
        .await?;

    Ok(ApiResponse::success(organization))
}

pub async fn create_organization_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateOrganizationRequest>,
) -> AppResult<impl IntoResponse> {
    // 組織構造の変更はスーパーユーザー専用
    user.ensure_superuser()?;
    payload.validate()?;

    let organization = app_state
        .organization_service
        .create_organization(
            payload.full_name,
            payload.short_name,
            payload.requisites,
            payload.location,
        )
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(organization)))
}

pub async fn update_organization_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateOrganizationRequest>,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;
    payload.validate()?;

    let organization = app_state
        .organization_service
        .update_organization(
            id,
            payload.full_name,
            payload.short_name,
            payload.requisites,
            payload.location,
        )
        .await?;

    Ok(ApiResponse::success(organization))
}

pub async fn delete_organization_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;

    app_state
        .organization_service
        .delete_organization(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn organization_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/organizations",
            get(list_organizations_handler).post(create_organization_handler),
        )
        .route(
            "/organizations/{id}",
            get(get_organization_handler)
                .patch(update_organization_handler)
                .delete(delete_organization_handler),
        )
        .with_state(app_state)
}
