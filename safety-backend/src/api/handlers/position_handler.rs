// src/api/handlers/position_handler.rs

use crate::api::dto::position_dto::{
    CreatePositionRequest, PositionListQuery, UpdatePositionRequest,
};
use crate::api::handlers::UuidPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::response::PaginationMeta;
use crate::types::{ApiResponse, PaginationQuery};
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use validator::Validate;

pub async fn list_positions_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(pagination): Query<PaginationQuery>,
    Query(query): Query<PositionListQuery>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let (page, per_page) = pagination.get_pagination();

    let (positions, total) = app_state
        .position_service
        .list_positions(&context, query.search.as_deref(), page, per_page)
        .await?;

    Ok(ApiResponse::success_with_pagination(
        positions,
        PaginationMeta::new(page, per_page, total as i64),
    ))
}

pub async fn get_position_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let position = app_state.position_service.get_position(&context, id).await?;

    Ok(ApiResponse::success(position))
}

pub async fn create_position_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreatePositionRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let context = user.access_context();
    let position = app_state
        .position_service
        .create_position(
            &context,
            payload.name,
            payload.organization_id,
            payload.subdivision_id,
            payload.department_id,
            payload.electrical_safety_group,
            payload.is_safety_responsible,
            payload.safety_instructions,
        )
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(position)))
}

pub async fn update_position_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdatePositionRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let context = user.access_context();
    let position = app_state
        .position_service
        .update_position(
            &context,
            id,
            payload.name,
            payload.electrical_safety_group,
            payload.is_safety_responsible,
            payload.safety_instructions,
        )
        .await?;

    Ok(ApiResponse::success(position))
}

pub async fn delete_position_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    app_state
        .position_service
        .delete_position(&context, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn position_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/positions",
            get(list_positions_handler).post(create_position_handler),
        )
        .route(
            "/positions/{id}",
            get(get_position_handler)
                .patch(update_position_handler)
                .delete(delete_position_handler),
        )
        .with_state(app_state)
}
