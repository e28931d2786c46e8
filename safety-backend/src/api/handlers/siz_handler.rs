// src/api/handlers/siz_handler.rs

use crate::api::dto::siz_dto::{
    CreateSizIssueRequest, CreateSizItemRequest, CreateSizNormRequest, ReturnSizIssueRequest,
    SizIssueListQuery, SizNormListQuery,
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
    routing::{delete, get, post},
    Router,
};
use validator::Validate;

// --- カタログ: 保護具 ---

pub async fn list_siz_items_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
) -> AppResult<impl IntoResponse> {
    let items = app_state.siz_service.list_items().await?;
    Ok(ApiResponse::success(items))
}

pub async fn create_siz_item_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateSizItemRequest>,
) -> AppResult<impl IntoResponse> {
    // カタログの変更はスーパーユーザー専用
    user.ensure_superuser()?;
    payload.validate()?;

    let item = app_state
        .siz_service
        .create_item(
            payload.name,
            payload.classification,
            payload.unit,
            payload.wear_period_months,
            payload.wear_type,
        )
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(item)))
}

pub async fn delete_siz_item_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    user.ensure_superuser()?;

    app_state.siz_service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- 支給基準 ---

pub async fn list_siz_norms_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<SizNormListQuery>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let norms = app_state
        .siz_service
        .list_norms(&context, query.position_id)
        .await?;

    Ok(ApiResponse::success(norms))
}

pub async fn create_siz_norm_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateSizNormRequest>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let norm = app_state
        .siz_service
        .create_norm(
            &context,
            payload.position_id,
            payload.siz_item_id,
            payload.quantity,
            payload.condition,
        )
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(norm)))
}

pub async fn delete_siz_norm_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    app_state.siz_service.delete_norm(&context, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// --- 支給記録 ---

pub async fn list_siz_issues_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Query(pagination): Query<PaginationQuery>,
    Query(query): Query<SizIssueListQuery>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let (page, per_page) = pagination.get_pagination();

    let (issues, total) = app_state
        .siz_service
        .list_issues(
            &context,
            query.employee_id,
            query.outstanding_only,
            page,
            per_page,
        )
        .await?;

    Ok(ApiResponse::success_with_pagination(
        issues,
        PaginationMeta::new(page, per_page, total as i64),
    ))
}

pub async fn create_siz_issue_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateSizIssueRequest>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let issue = app_state
        .siz_service
        .create_issue(
            &context,
            payload.employee_id,
            payload.siz_item_id,
            payload.issue_date,
            payload.quantity,
            payload.wear_percent,
        )
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(issue)))
}

/// 保護具の返却記録
pub async fn return_siz_issue_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<ReturnSizIssueRequest>,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let issue = app_state
        .siz_service
        .return_issue(&context, id, payload.return_date)
        .await?;

    Ok(ApiResponse::success(issue))
}

pub async fn delete_siz_issue_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    app_state.siz_service.delete_issue(&context, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn siz_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/siz/items",
            get(list_siz_items_handler).post(create_siz_item_handler),
        )
        .route("/siz/items/{id}", delete(delete_siz_item_handler))
        .route(
            "/siz/norms",
            get(list_siz_norms_handler).post(create_siz_norm_handler),
        )
        .route("/siz/norms/{id}", delete(delete_siz_norm_handler))
        .route(
            "/siz/issues",
            get(list_siz_issues_handler).post(create_siz_issue_handler),
        )
        .route("/siz/issues/{id}", delete(delete_siz_issue_handler))
        .route("/siz/issues/{id}/return", post(return_siz_issue_handler))
        .with_state(app_state)
}
