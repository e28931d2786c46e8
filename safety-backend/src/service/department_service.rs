// src/service/department_service.rs

use crate::access::{AccessContext, AccessControlService};
use crate::domain::department_model;
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::{
    department_repository::DepartmentRepository,
    organization_repository::OrganizationRepository,
    subdivision_repository::SubdivisionRepository,
};
use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

pub struct DepartmentService {
    db: DatabaseConnection,
    access: Arc<AccessControlService>,
}

impl DepartmentService {
    pub fn new(db: DatabaseConnection, access: Arc<AccessControlService>) -> Self {
        Self { db, access }
    }

    /// 可視な課の一覧（組織・部門での絞り込みは任意）
    pub async fn list_departments(
        &self,
        context: &AccessContext,
        organization_id: Option<Uuid>,
        subdivision_id: Option<Uuid>,
    ) -> AppResult<Vec<department_model::Model>> {
        if context.is_superuser() {
            return DepartmentRepository::find_visible(
                &self.db,
                None,
                organization_id,
                subdivision_id,
            )
            .await;
        }

        let visible = self.access.accessible_departments(context).await?;
        DepartmentRepository::find_visible(
            &self.db,
            Some(&visible),
            organization_id,
            subdivision_id,
        )
        .await
    }

    pub async fn get_department(
        &self,
        context: &AccessContext,
        id: Uuid,
    ) -> AppResult<department_model::Model> {
        let department = DepartmentRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

        if !context.is_superuser() {
            let visible = self.access.accessible_departments(context).await?;
            if !visible.contains(&id) {
                return Err(AppError::Forbidden(
                    "Access to this department is not permitted".to_string(),
                ));
            }
        }

        Ok(department)
    }

    pub async fn create_department(
        &self,
        name: String,
        short_name: Option<String>,
        organization_id: Uuid,
        subdivision_id: Option<Uuid>,
    ) -> AppResult<department_model::Model> {
        if OrganizationRepository::find_by_id(&self.db, organization_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Organization not found".to_string()));
        }

        // 課の subdivision はレコードの organization に属していること
        if let Some(subdivision_id) = subdivision_id {
            let subdivision = SubdivisionRepository::find_by_id(&self.db, subdivision_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Subdivision not found".to_string()))?;

            if subdivision.organization_id != organization_id {
                return Err(AppError::ValidationError(
                    "Subdivision must belong to the selected organization".to_string(),
                ));
            }
        }

        let department = department_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            short_name: Set(short_name),
            organization_id: Set(organization_id),
            subdivision_id: Set(subdivision_id),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        let department = DepartmentRepository::create(&self.db, department).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Department created",
            "department_id" => department.id,
            "organization_id" => department.organization_id,
            "name" => &department.name
        );

        Ok(department)
    }

    pub async fn update_department(
        &self,
        id: Uuid,
        name: Option<String>,
        short_name: Option<String>,
    ) -> AppResult<department_model::Model> {
        let department = DepartmentRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

        let mut active_model: department_model::ActiveModel = department.into();

        if let Some(name) = name {
            active_model.name = Set(name);
        }
        if let Some(short_name) = short_name {
            active_model.short_name = Set(Some(short_name));
        }
        active_model.updated_at = Set(Utc::now());

        DepartmentRepository::update_by_id(&self.db, id, active_model).await
    }

    /// 課の削除（参照されている間は削除不可）
    pub async fn delete_department(&self, id: Uuid) -> AppResult<()> {
        if DepartmentRepository::find_by_id(&self.db, id).await?.is_none() {
            return Err(AppError::NotFound("Department not found".to_string()));
        }

        if DepartmentRepository::is_referenced(&self.db, id).await? {
            return Err(AppError::Conflict(
                "Department is referenced by other records and cannot be deleted".to_string(),
            ));
        }

        DepartmentRepository::delete_by_id(&self.db, id).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Department deleted",
            "department_id" => id
        );

        Ok(())
    }
}
