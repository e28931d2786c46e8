// src/api/handlers/department_handler.rs

use crate::api::dto::department_dto::{
    CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest,
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

pub async fn list_departments_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<DepartmentListQuery>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let departments = app_state
        .department_service
        .list_departments(&context, query.organization_id, query.subdivision_id)
        .await?;

    Ok(ApiResponse::success(departments))
}

pub async fn get_department_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let department = app_state
        .department_service
        .get_department(&context, id)
        .await?;

    Ok(ApiResponse::success(department))
}

pub async fn create_department_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateDepartmentRequest>,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;
    payload.validate()?;

    let department = app_state
        .department_service
        .create_department(
            payload.name,
            payload.short_name,
            payload.organization_id,
            payload.subdivision_id,
        )
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(department)))
}

pub async fn update_department_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;
    payload.validate()?;

    let department = app_state
        .department_service
        .update_department(id, payload.name, payload.short_name)
        .await?;

    Ok(ApiResponse::success(department))
}

pub async fn delete_department_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;

    app_state.department_service.delete_department(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn department_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/departments",
            get(list_departments_handler).post(create_department_handler),
        )
        .route(
            "/departments/{id}",
            get(get_department_handler)
                .patch(update_department_handler)
                .delete(delete_department_handler),
        )
        .with_state(app_state)
}
