// src/service/position_service.rs

use crate::access::resolver::ScopeColumns;
use crate::access::scope::{HierarchyScoped, ScopeRef};
use crate::access::{AccessContext, AccessControlService};
use crate::domain::position_model::{self, ELECTRICAL_SAFETY_GROUPS};
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::position_repository::PositionRepository;
use crate::service::scope_validation::validate_scope_assignment;
use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

pub struct PositionService {
    db: DatabaseConnection,
    access: Arc<AccessControlService>,
}

fn scope_columns() -> ScopeColumns<position_model::Column> {
    ScopeColumns {
        organization: Some(position_model::Column::OrganizationId),
        subdivision: Some(position_model::Column::SubdivisionId),
        department: Some(position_model::Column::DepartmentId),
    }
}

impl PositionService {
    pub fn new(db: DatabaseConnection, access: Arc<AccessControlService>) -> Self {
        Self { db, access }
    }

    pub async fn list_positions(
        &self,
        context: &AccessContext,
        search: Option<&str>,
        page: i32,
        per_page: i32,
    ) -> AppResult<(Vec<position_model::Model>, u64)> {
        let condition = self
            .access
            .scope_condition(context, scope_columns())
            .await?;

        PositionRepository::find_scoped(&self.db, condition, search, page, per_page).await
    }

    pub async fn get_position(
        &self,
        context: &AccessContext,
        id: Uuid,
    ) -> AppResult<position_model::Model> {
        let position = PositionRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Position not found".to_string()))?;

        self.access
            .ensure_can_access(context, &position.scope_ref())
            .await?;

        Ok(position)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_position(
        &self,
        context: &AccessContext,
        name: String,
        organization_id: Uuid,
        subdivision_id: Option<Uuid>,
        department_id: Option<Uuid>,
        electrical_safety_group: Option<String>,
        is_safety_responsible: bool,
        safety_instructions: Option<String>,
    ) -> AppResult<position_model::Model> {
        validate_scope_assignment(&self.db, organization_id, subdivision_id, department_id)
            .await?;

        // 作成先のスコープにアクセスできること
        let target_scope = ScopeRef {
            organization: Some(organization_id),
            subdivision: subdivision_id,
            department: department_id,
        };
        self.access.ensure_can_access(context, &target_scope).await?;

        if let Some(group) = &electrical_safety_group {
            if !ELECTRICAL_SAFETY_GROUPS.contains(&group.as_str()) {
                return Err(AppError::ValidationError(
                    "Electrical safety group must be one of I..V".to_string(),
                ));
            }
        }

        let position = position_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            organization_id: Set(organization_id),
            subdivision_id: Set(subdivision_id),
            department_id: Set(department_id),
            electrical_safety_group: Set(electrical_safety_group),
            is_safety_responsible: Set(is_safety_responsible),
            safety_instructions: Set(safety_instructions),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        let position = PositionRepository::create(&self.db, position).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Position created",
            "position_id" => position.id,
            "organization_id" => position.organization_id,
            "name" => &position.name
        );

        Ok(position)
    }

    pub async fn update_position(
        &self,
        context: &AccessContext,
        id: Uuid,
        name: Option<String>,
        electrical_safety_group: Option<String>,
        is_safety_responsible: Option<bool>,
        safety_instructions: Option<String>,
    ) -> AppResult<position_model::Model> {
        let position = self.get_position(context, id).await?;

        if let Some(group) = &electrical_safety_group {
            if !ELECTRICAL_SAFETY_GROUPS.contains(&group.as_str()) {
                return Err(AppError::ValidationError(
                    "Electrical safety group must be one of I..V".to_string(),
                ));
            }
        }

        let mut active_model: position_model::ActiveModel = position.into();

        if let Some(name) = name {
            active_model.name = Set(name);
        }
        if let Some(group) = electrical_safety_group {
            active_model.electrical_safety_group = Set(Some(group));
        }
        if let Some(is_responsible) = is_safety_responsible {
            active_model.is_safety_responsible = Set(is_responsible);
        }
        if let Some(instructions) = safety_instructions {
            active_model.safety_instructions = Set(Some(instructions));
        }
        active_model.updated_at = Set(Utc::now());

        PositionRepository::update_by_id(&self.db, id, active_model).await
    }

    pub async fn delete_position(&self, context: &AccessContext, id: Uuid) -> AppResult<()> {
        let position = self.get_position(context, id).await?;

        if PositionRepository::is_referenced(&self.db, position.id).await? {
            return Err(AppError::Conflict(
                "Position is assigned to employees and cannot be deleted".to_string(),
            ));
        }

        PositionRepository::delete_by_id(&self.db, id).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Position deleted",
            "position_id" => id
        );

        Ok(())
    }
}
