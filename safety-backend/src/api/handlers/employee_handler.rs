// src/api/handlers/employee_handler.rs

use crate::api::dto::employee_dto::{
    CreateEmployeeRequest, EmployeeListQuery, TransferEmployeeRequest, UpdateEmployeeRequest,
};
use crate::api::handlers::UuidPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::service::employee_service::{EmployeeUpdate, NewEmployee};
use crate::types::response::PaginationMeta;
use crate::types::{ApiResponse, PaginationQuery};
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use validator::Validate;

pub async fn list_employees_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(pagination): Query<PaginationQuery>,
    Query(query): Query<EmployeeListQuery>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let (page, per_page) = pagination.get_pagination();

    let (employees, total) = app_state
        .employee_service
        .list_employees(
            &context,
            query.search.as_deref(),
            query.status.as_deref(),
            page,
            per_page,
        )
        .await?;

    Ok(ApiResponse::success_with_pagination(
        employees,
        PaginationMeta::new(page, per_page, total as i64),
    ))
}

pub async fn get_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let employee = app_state.employee_service.get_employee(&context, id).await?;

    Ok(ApiResponse::success(employee))
}

pub async fn create_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let context = user.access_context();
    let employee = app_state
        .employee_service
        .create_employee(
            &context,
            NewEmployee {
                full_name: payload.full_name,
                date_of_birth: payload.date_of_birth,
                email: payload.email,
                organization_id: payload.organization_id,
                subdivision_id: payload.subdivision_id,
                department_id: payload.department_id,
                position_id: payload.position_id,
                status: payload.status,
                hire_date: payload.hire_date,
                height: payload.height,
                clothing_size: payload.clothing_size,
                shoe_size: payload.shoe_size,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(employee)))
}

pub async fn update_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let context = user.access_context();
    let employee = app_state
        .employee_service
        .update_employee(
            &context,
            id,
            EmployeeUpdate {
                full_name: payload.full_name,
                email: payload.email,
                position_id: payload.position_id,
                status: payload.status,
                hire_date: payload.hire_date,
                height: payload.height,
                clothing_size: payload.clothing_size,
                shoe_size: payload.shoe_size,
            },
        )
        .await?;

    Ok(ApiResponse::success(employee))
}

pub async fn transfer_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<TransferEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let employee = app_state
        .employee_service
        .transfer_employee(
            &context,
            id,
            payload.organization_id,
            payload.subdivision_id,
            payload.department_id,
        )
        .await?;

    Ok(ApiResponse::success(employee))
}

pub async fn delete_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    app_state
        .employee_service
        .delete_employee(&context, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn employee_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/{id}",
            get(get_employee_handler)
                .patch(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/employees/{id}/transfer", post(transfer_employee_handler))
        .with_state(app_state)
}
