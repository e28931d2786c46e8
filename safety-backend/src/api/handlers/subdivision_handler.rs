// src/api/handlers/subdivision_handler.rs

use crate::api::dto::subdivision_dto::{
    CreateSubdivisionRequest, SubdivisionListQuery, UpdateSubdivisionRequest,
};
use crate::api::handlers::UuidPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use validator::Validate;

pub async fn list_subdivisions_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<SubdivisionListQuery>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let subdivisions = app_state
        .subdivision_service
        .list_subdivisions(&context, query.organization_id)
        .await?;

    Ok(ApiResponse::success(subdivisions))
}

pub async fn get_subdivision_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let subdivision = app_state
        .subdivision_service
        .get_subdivision(&context, id)
        .await?;

    Ok(ApiResponse::success(subdivision))
}

pub async fn create_subdivision_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateSubdivisionRequest>,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;
    payload.validate()?;

    let subdivision = app_state
        .subdivision_service
        .create_subdivision(payload.name, payload.short_name, payload.organization_id)
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(subdivision)))
}

pub async fn update_subdivision_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateSubdivisionRequest>,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;
    payload.validate()?;

    let subdivision = app_state
        .subdivision_service
        .update_subdivision(id, payload.name, payload.short_name)
        .await?;

    Ok(ApiResponse::success(subdivision))
}

pub async fn delete_subdivision_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;

    app_state
        .subdivision_service
        .delete_subdivision(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn subdivision_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/subdivisions",
            get(list_subdivisions_handler).post(create_subdivision_handler),
        )
        .route(
            "/subdivisions/{id}",
            get(get_subdivision_handler)
                .patch(update_subdivision_handler)
                .delete(delete_subdivision_handler),
        )
        .with_state(app_state)
}
