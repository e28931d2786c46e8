// src/api/handlers/mod.rs

use crate::error::AppError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

pub mod access_profile_handler;
pub mod auth_handler;
pub mod dashboard_handler;
pub mod department_handler;
pub mod employee_handler;
pub mod equipment_handler;
pub mod medical_handler;
pub mod organization_handler;
pub mod position_handler;
pub mod siz_handler;
pub mod subdivision_handler;
pub mod user_handler;

// カスタムUUID抽出器（不正なUUIDをバリデーションエラーとして返す）
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(path_str) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::ValidationError("Invalid path parameter".to_string()))?;

        let uuid = Uuid::parse_str(&path_str).map_err(|_| {
            AppError::ValidationError(format!("Invalid UUID format: '{}'", path_str))
        })?;

        Ok(UuidPath(uuid))
    }
}
