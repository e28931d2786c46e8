// src/service/subdivision_service.rs

use crate::access::{AccessContext, AccessControlService};
use crate::domain::subdivision_model;
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::{
    organization_repository::OrganizationRepository,
    subdivision_repository::SubdivisionRepository,
};
use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

pub struct SubdivisionService {
    db: DatabaseConnection,
    access: Arc<AccessControlService>,
}

impl SubdivisionService {
    pub fn new(db: DatabaseConnection, access: Arc<AccessControlService>) -> Self {
        Self { db, access }
    }

    /// 可視な部門の一覧（組織での絞り込みは任意）
    pub async fn list_subdivisions(
        &self,
        context: &AccessContext,
        organization_id: Option<Uuid>,
    ) -> AppResult<Vec<subdivision_model::Model>> {
        if context.is_superuser() {
            return SubdivisionRepository::find_visible(&self.db, None, organization_id).await;
        }

        let visible = self.access.accessible_subdivisions(context).await?;
        SubdivisionRepository::find_visible(&self.db, Some(&visible), organization_id).await
    }

    pub async fn get_subdivision(
        &self,
        context: &AccessContext,
        id: Uuid,
    ) -> AppResult<subdivision_model::Model> {
        let subdivision = SubdivisionRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Subdivision not found".to_string()))?;

        if !context.is_superuser() {
            let visible = self.access.accessible_subdivisions(context).await?;
            if !visible.contains(&id) {
                return Err(AppError::Forbidden(
                    "Access to this subdivision is not permitted".to_string(),
                ));
            }
        }

        Ok(subdivision)
    }

    pub async fn create_subdivision(
        &self,
        name: String,
        short_name: Option<String>,
        organization_id: Uuid,
    ) -> AppResult<subdivision_model::Model> {
        if OrganizationRepository::find_by_id(&self.db, organization_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Organization not found".to_string()));
        }

        // 同一組織内での重複名チェック
        if SubdivisionRepository::find_by_name_and_organization(&self.db, &name, organization_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Subdivision with same name already exists in this organization".to_string(),
            ));
        }

        let subdivision = subdivision_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            short_name: Set(short_name),
            organization_id: Set(organization_id),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        let subdivision = SubdivisionRepository::create(&self.db, subdivision).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Subdivision created",
            "subdivision_id" => subdivision.id,
            "organization_id" => subdivision.organization_id,
            "name" => &subdivision.name
        );

        Ok(subdivision)
    }

    pub async fn update_subdivision(
        &self,
        id: Uuid,
        name: Option<String>,
        short_name: Option<String>,
    ) -> AppResult<subdivision_model::Model> {
        let subdivision = SubdivisionRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Subdivision not found".to_string()))?;

        let organization_id = subdivision.organization_id;
        let mut active_model: subdivision_model::ActiveModel = subdivision.into();

        if let Some(name) = name {
            if SubdivisionRepository::find_by_name_and_organization(
                &self.db,
                &name,
                organization_id,
            )
            .await?
            .is_some_and(|existing| existing.id != id)
            {
                return Err(AppError::Conflict(
                    "Subdivision with same name already exists in this organization".to_string(),
                ));
            }
            active_model.name = Set(name);
        }
        if let Some(short_name) = short_name {
            active_model.short_name = Set(Some(short_name));
        }
        active_model.updated_at = Set(Utc::now());

        SubdivisionRepository::update_by_id(&self.db, id, active_model).await
    }

    /// 部門の削除（参照されている間は削除不可）
    pub async fn delete_subdivision(&self, id: Uuid) -> AppResult<()> {
        if SubdivisionRepository::find_by_id(&self.db, id).await?.is_none() {
            return Err(AppError::NotFound("Subdivision not found".to_string()));
        }

        if SubdivisionRepository::is_referenced(&self.db, id).await? {
            return Err(AppError::Conflict(
                "Subdivision is referenced by other records and cannot be deleted".to_string(),
            ));
        }

        SubdivisionRepository::delete_by_id(&self.db, id).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Subdivision deleted",
            "subdivision_id" => id
        );

        Ok(())
    }
}
