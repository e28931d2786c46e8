// src/service/scope_validation.rs
//
// 書き込み時のスコープ整合性検証。
// レコードの department が設定されている場合、その課の subdivision /
// organization はレコード自身のフィールドと一致していなければならない。
// この検証はリゾルバの外側（サービス層）の責務。

use crate::error::{AppError, AppResult};
use crate::repository::{
    department_repository::DepartmentRepository, subdivision_repository::SubdivisionRepository,
};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// レコードの帰属フィールドの組み合わせを検証
///
/// - subdivision はレコードの organization に属していること
/// - department の指定には subdivision が必須
/// - department はレコードの organization / subdivision に属していること
pub async fn validate_scope_assignment(
    db: &DatabaseConnection,
    organization_id: Uuid,
    subdivision_id: Option<Uuid>,
    department_id: Option<Uuid>,
) -> AppResult<()> {
    if let Some(subdivision_id) = subdivision_id {
        let subdivision = SubdivisionRepository::find_by_id(db, subdivision_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Subdivision not found".to_string()))?;

        if subdivision.organization_id != organization_id {
            return Err(AppError::ValidationError(
                "Subdivision must belong to the selected organization".to_string(),
            ));
        }
    }

    if let Some(department_id) = department_id {
        let Some(subdivision_id) = subdivision_id else {
            return Err(AppError::ValidationError(
                "Department cannot be set without a subdivision".to_string(),
            ));
        };

        let department = DepartmentRepository::find_by_id(db, department_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

        if department.organization_id != organization_id {
            return Err(AppError::ValidationError(
                "Department must belong to the selected organization".to_string(),
            ));
        }

        if department.subdivision_id != Some(subdivision_id) {
            return Err(AppError::ValidationError(
                "Department must belong to the selected subdivision".to_string(),
            ));
        }
    }

    Ok(())
}
