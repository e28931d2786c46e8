// src/api/handlers/medical_handler.rs

use crate::api::dto::medical_dto::{
    CompleteExaminationRequest, CreateExaminationRequest, CreateExaminationTypeRequest,
    CreateHarmfulFactorRequest, ExaminationListQuery,
};
use crate::api::handlers::UuidPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::service::medical_service::NewExamination;
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

// --- カタログ: 検診種別 ---

pub async fn list_examination_types_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> AppResult<impl IntoResponse> {
    let types = app_state.medical_service.list_examination_types().await?;
    Ok(ApiResponse::success(types))
}

pub async fn create_examination_type_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateExaminationTypeRequest>,
) -> AppResult<impl IntoResponse> {
    // カタログの変更はスーパーユーザー専用
    user.ensure_superuser()?;
    payload.validate()?;

    let examination_type = app_state
        .medical_service
        .create_examination_type(payload.name)
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(examination_type)))
}

pub async fn delete_examination_type_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;

    app_state.medical_service.delete_examination_type(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- カタログ: 有害要因 ---

pub async fn list_harmful_factors_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> AppResult<impl IntoResponse> {
    let factors = app_state.medical_service.list_harmful_factors().await?;
    Ok(ApiResponse::success(factors))
}

pub async fn create_harmful_factor_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateHarmfulFactorRequest>,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;
    payload.validate()?;

    let factor = app_state
        .medical_service
        .create_harmful_factor(
            payload.short_name,
            payload.full_name,
            payload.periodicity_months,
        )
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(factor)))
}

pub async fn delete_harmful_factor_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;

    app_state.medical_service.delete_harmful_factor(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- 検診記録 ---

pub async fn list_examinations_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(pagination): Query<PaginationQuery>,
    Query(query): Query<ExaminationListQuery>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let (page, per_page) = pagination.get_pagination();

    let (examinations, total) = app_state
        .medical_service
        .list_examinations(
            &context,
            query.employee_id,
            query.status.as_deref(),
            page,
            per_page,
        )
        .await?;

    Ok(ApiResponse::success_with_pagination(
        examinations,
        PaginationMeta::new(page, per_page, total as i64),
    ))
}

pub async fn get_examination_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let examination = app_state
        .medical_service
        .get_examination(&context, id)
        .await?;

    Ok(ApiResponse::success(examination))
}

pub async fn create_examination_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateExaminationRequest>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let examination = app_state
        .medical_service
        .create_examination(
            &context,
            NewExamination {
                employee_id: payload.employee_id,
                examination_type_id: payload.examination_type_id,
                harmful_factor_id: payload.harmful_factor_id,
                date_completed: payload.date_completed,
                next_date: payload.next_date,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(examination)))
}

/// 検診実施の記録
pub async fn complete_examination_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<CompleteExaminationRequest>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let examination = app_state
        .medical_service
        .complete_examination(&context, id, payload.completed_on)
        .await?;

    Ok(ApiResponse::success(examination))
}

pub async fn delete_examination_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    app_state
        .medical_service
        .delete_examination(&context, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn medical_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/medical/examination-types",
            get(list_examination_types_handler).post(create_examination_type_handler),
        )
        .route(
            "/medical/examination-types/{id}",
            axum::routing::delete(delete_examination_type_handler),
        )
        .route(
            "/medical/harmful-factors",
            get(list_harmful_factors_handler).post(create_harmful_factor_handler),
        )
        .route(
            "/medical/harmful-factors/{id}",
            axum::routing::delete(delete_harmful_factor_handler),
        )
        .route(
            "/medical/examinations",
            get(list_examinations_handler).post(create_examination_handler),
        )
        .route(
            "/medical/examinations/{id}",
            get(get_examination_handler).delete(delete_examination_handler),
        )
        .route(
            "/medical/examinations/{id}/complete",
            post(complete_examination_handler),
        )
        .with_state(app_state)
}
