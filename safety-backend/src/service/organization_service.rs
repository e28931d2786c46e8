// src/service/organization_service.rs

use crate::access::{AccessContext, AccessControlService};
use crate::domain::organization_model;
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::organization_repository::OrganizationRepository;
use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

pub struct OrganizationService {
    db: DatabaseConnection,
    access: Arc<AccessControlService>,
}

impl OrganizationService {
    pub fn new(db: DatabaseConnection, access: Arc<AccessControlService>) -> Self {
        Self { db, access }
    }

    /// 可視な組織の一覧
    pub async fn list_organizations(
        &self,
        context: &AccessContext,
    ) -> AppResult<Vec<organization_model::Model>> {
        if context.is_superuser() {
            return OrganizationRepository::find_all(&self.db).await;
        }

        let visible = self.access.accessible_organizations(context).await?;
        OrganizationRepository::find_by_ids(&self.db, &visible).await
    }

    pub async fn get_organization(
        &self,
        context: &AccessContext,
        id: Uuid,
    ) -> AppResult<organization_model::Model> {
        let organization = OrganizationRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))?;

        if !context.is_superuser() {
            let visible = self.access.accessible_organizations(context).await?;
            if !visible.contains(&id) {
                return Err(AppError::Forbidden(
                    "Access to this organization is not permitted".to_string(),
                ));
            }
        }

        Ok(organization)
    }

    pub async fn create_organization(
        &self,
        full_name: String,
        short_name: String,
        requisites: Option<String>,
        location: Option<String>,
    ) -> AppResult<organization_model::Model> {
        let organization = organization_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(full_name),
            short_name: Set(short_name),
            requisites: Set(requisites),
            location: Set(location),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        let organization = OrganizationRepository::create(&self.db, organization).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Organization created",
            "organization_id" => organization.id,
            "name" => &organization.full_name
        );

        Ok(organization)
    }

    pub async fn update_organization(
        &self,
        id: Uuid,
        full_name: Option<String>,
        short_name: Option<String>,
        requisites: Option<String>,
        location: Option<String>,
    ) -> AppResult<organization_model::Model> {
        let organization = OrganizationRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))?;

        let mut active_model: organization_model::ActiveModel = organization.into();

        if let Some(full_name) = full_name {
            active_model.full_name = Set(full_name);
        }
        if let Some(short_name) = short_name {
            active_model.short_name = Set(short_name);
        }
        if let Some(requisites) = requisites {
            active_model.requisites = Set(Some(requisites));
        }
        if let Some(location) = location {
            active_model.location = Set(Some(location));
        }
        active_model.updated_at = Set(Utc::now());

        OrganizationRepository::update_by_id(&self.db, id, active_model).await
    }

    /// 組織の削除（参照されている間は削除不可）
    pub async fn delete_organization(&self, id: Uuid) -> AppResult<()> {
        if OrganizationRepository::find_by_id(&self.db, id).await?.is_none() {
            return Err(AppError::NotFound("Organization not found".to_string()));
        }

        if OrganizationRepository::is_referenced(&self.db, id).await? {
            return Err(AppError::Conflict(
                "Organization is referenced by other records and cannot be deleted".to_string(),
            ));
        }

        OrganizationRepository::delete_by_id(&self.db, id).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Organization deleted",
            "organization_id" => id
        );

        Ok(())
    }
}
