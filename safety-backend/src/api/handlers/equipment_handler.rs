// src/api/handlers/equipment_handler.rs

use crate::api::dto::equipment_dto::{
    CreateEquipmentRequest, EquipmentListQuery, RecordMaintenanceRequest, UpdateEquipmentRequest,
};
use crate::api::handlers::UuidPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::service::equipment_service::NewEquipment;
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

pub async fn list_equipment_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(pagination): Query<PaginationQuery>,
    Query(query): Query<EquipmentListQuery>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let (page, per_page) = pagination.get_pagination();

    let (equipment, total) = app_state
        .equipment_service
        .list_equipment(
            &context,
            query.search.as_deref(),
            query.maintenance_status.as_deref(),
            page,
            per_page,
        )
        .await?;

    Ok(ApiResponse::success_with_pagination(
        equipment,
        PaginationMeta::new(page, per_page, total as i64),
    ))
}

pub async fn get_equipment_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let equipment = app_state
        .equipment_service
        .get_equipment(&context, id)
        .await?;

    Ok(ApiResponse::success(equipment))
}

pub async fn create_equipment_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateEquipmentRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let context = user.access_context();
    let equipment = app_state
        .equipment_service
        .create_equipment(
            &context,
            NewEquipment {
                name: payload.name,
                inventory_number: payload.inventory_number,
                equipment_type: payload.equipment_type,
                organization_id: payload.organization_id,
                subdivision_id: payload.subdivision_id,
                department_id: payload.department_id,
                last_maintenance_date: payload.last_maintenance_date,
                maintenance_period_months: payload.maintenance_period_months,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(equipment)))
}

pub async fn update_equipment_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateEquipmentRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let context = user.access_context();
    let equipment = app_state
        .equipment_service
        .update_equipment(
            &context,
            id,
            payload.name,
            payload.equipment_type,
            payload.maintenance_period_months,
            payload.maintenance_status,
        )
        .await?;

    Ok(ApiResponse::success(equipment))
}

/// 保守実施の記録
pub async fn record_maintenance_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<RecordMaintenanceRequest>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let equipment = app_state
        .equipment_service
        .record_maintenance(&context, id, payload.performed_on)
        .await?;

    Ok(ApiResponse::success(equipment))
}

pub async fn delete_equipment_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    app_state
        .equipment_service
        .delete_equipment(&context, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn equipment_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/equipment",
            get(list_equipment_handler).post(create_equipment_handler),
        )
        .route(
            "/equipment/{id}",
            get(get_equipment_handler)
                .patch(update_equipment_handler)
                .delete(delete_equipment_handler),
        )
        .route(
            "/equipment/{id}/maintenance",
            post(record_maintenance_handler),
        )
        .with_state(app_state)
}
