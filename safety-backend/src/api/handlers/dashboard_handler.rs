// src/api/handlers/dashboard_handler.rs

use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde_json::json;

/// 期限ダッシュボード（スコープ内の保守・検診期限の集計）
pub async fn dashboard_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<impl IntoResponse> {
    let context = user.access_context();
    let summary = app_state.dashboard_service.get_summary(&context).await?;

    Ok(ApiResponse::success(summary))
}

pub async fn health_check_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

pub fn dashboard_router(app_state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/health", get(health_check_handler))
        .with_state(app_state)
}
