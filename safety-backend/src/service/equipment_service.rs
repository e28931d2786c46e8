// src/service/equipment_service.rs

use crate::access::resolver::ScopeColumns;
use crate::access::scope::{HierarchyScoped, ScopeRef};
use crate::access::{AccessContext, AccessControlService};
use crate::domain::equipment_model::{self, MaintenanceStatus};
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::equipment_repository::EquipmentRepository;
use crate::service::scope_validation::validate_scope_assignment;
use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

pub struct EquipmentService {
    db: DatabaseConnection,
    access: Arc<AccessControlService>,
}

fn scope_columns() -> ScopeColumns<equipment_model::Column> {
    ScopeColumns {
        organization: Some(equipment_model::Column::OrganizationId),
        subdivision: Some(equipment_model::Column::SubdivisionId),
        department: Some(equipment_model::Column::DepartmentId),
    }
}

/// 設備作成の入力
pub struct NewEquipment {
    pub name: String,
    pub inventory_number: String,
    pub equipment_type: Option<String>,
    pub organization_id: Uuid,
    pub subdivision_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub maintenance_period_months: Option<i32>,
}

impl EquipmentService {
    pub fn new(db: DatabaseConnection, access: Arc<AccessControlService>) -> Self {
        Self { db, access }
    }

    pub async fn list_equipment(
        &self,
        context: &AccessContext,
        search: Option<&str>,
        maintenance_status: Option<&str>,
        page: i32,
        per_page: i32,
    ) -> AppResult<(Vec<equipment_model::Model>, u64)> {
        if let Some(status) = maintenance_status {
            if MaintenanceStatus::from_str(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Unknown maintenance status: {}",
                    status
                )));
            }
        }

        let condition = self
            .access
            .scope_condition(context, scope_columns())
            .await?;

        EquipmentRepository::find_scoped(
            &self.db,
            condition,
            search,
            maintenance_status,
            page,
            per_page,
        )
        .await
    }

    pub async fn get_equipment(
        &self,
        context: &AccessContext,
        id: Uuid,
    ) -> AppResult<equipment_model::Model> {
        let equipment = EquipmentRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Equipment not found".to_string()))?;

        self.access
            .ensure_can_access(context, &equipment.scope_ref())
            .await?;

        Ok(equipment)
    }

    pub async fn create_equipment(
        &self,
        context: &AccessContext,
        input: NewEquipment,
    ) -> AppResult<equipment_model::Model> {
        validate_scope_assignment(
            &self.db,
            input.organization_id,
            input.subdivision_id,
            input.department_id,
        )
        .await?;

        let target_scope = ScopeRef {
            organization: Some(input.organization_id),
            subdivision: input.subdivision_id,
            department: input.department_id,
        };
        self.access.ensure_can_access(context, &target_scope).await?;

        if EquipmentRepository::find_by_inventory_number(&self.db, &input.inventory_number)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Equipment with this inventory number already exists".to_string(),
            ));
        }

        let period_months = input.maintenance_period_months.unwrap_or(12);
        if period_months <= 0 {
            return Err(AppError::ValidationError(
                "Maintenance period must be positive".to_string(),
            ));
        }

        // 最終保守日があれば次回保守日を周期から計算
        let next_maintenance_date = match input.last_maintenance_date {
            Some(performed_on) => {
                equipment_model::Model::compute_next_maintenance_date(performed_on, period_months)
            }
            None => None,
        };

        let equipment = equipment_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            inventory_number: Set(input.inventory_number),
            equipment_type: Set(input.equipment_type),
            organization_id: Set(input.organization_id),
            subdivision_id: Set(input.subdivision_id),
            department_id: Set(input.department_id),
            last_maintenance_date: Set(input.last_maintenance_date),
            next_maintenance_date: Set(next_maintenance_date),
            maintenance_period_months: Set(period_months),
            maintenance_status: Set(MaintenanceStatus::Operational.as_str().to_string()),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        let equipment = EquipmentRepository::create(&self.db, equipment).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Equipment created",
            "equipment_id" => equipment.id,
            "inventory_number" => &equipment.inventory_number
        );

        Ok(equipment)
    }

    pub async fn update_equipment(
        &self,
        context: &AccessContext,
        id: Uuid,
        name: Option<String>,
        equipment_type: Option<String>,
        maintenance_period_months: Option<i32>,
        maintenance_status: Option<String>,
    ) -> AppResult<equipment_model::Model> {
        let equipment = self.get_equipment(context, id).await?;

        if let Some(period) = maintenance_period_months {
            if period <= 0 {
                return Err(AppError::ValidationError(
                    "Maintenance period must be positive".to_string(),
                ));
            }
        }

        let status = match maintenance_status.as_deref() {
            Some(status) => Some(
                MaintenanceStatus::from_str(status)
                    .ok_or_else(|| {
                        AppError::ValidationError(format!(
                            "Unknown maintenance status: {}",
                            status
                        ))
                    })?
                    .as_str()
                    .to_string(),
            ),
            None => None,
        };

        let mut active_model: equipment_model::ActiveModel = equipment.into();

        if let Some(name) = name {
            active_model.name = Set(name);
        }
        if let Some(equipment_type) = equipment_type {
            active_model.equipment_type = Set(Some(equipment_type));
        }
        if let Some(period) = maintenance_period_months {
            active_model.maintenance_period_months = Set(period);
        }
        if let Some(status) = status {
            active_model.maintenance_status = Set(status);
        }
        active_model.updated_at = Set(Utc::now());

        EquipmentRepository::update_by_id(&self.db, id, active_model).await
    }

    /// 保守実施の記録
    ///
    /// 最終保守日を更新し、周期から次回保守日を再計算、
    /// ステータスを operational に戻す。
    pub async fn record_maintenance(
        &self,
        context: &AccessContext,
        id: Uuid,
        performed_on: NaiveDate,
    ) -> AppResult<equipment_model::Model> {
        let equipment = self.get_equipment(context, id).await?;

        let next_maintenance_date = equipment_model::Model::compute_next_maintenance_date(
            performed_on,
            equipment.maintenance_period_months,
        );

        let mut active_model: equipment_model::ActiveModel = equipment.into();
        active_model.last_maintenance_date = Set(Some(performed_on));
        active_model.next_maintenance_date = Set(next_maintenance_date);
        active_model.maintenance_status =
            Set(MaintenanceStatus::Operational.as_str().to_string());
        active_model.updated_at = Set(Utc::now());

        let equipment = EquipmentRepository::update_by_id(&self.db, id, active_model).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Equipment maintenance recorded",
            "equipment_id" => id,
            "performed_on" => performed_on,
            "next_maintenance_date" => equipment.next_maintenance_date
        );

        Ok(equipment)
    }

    pub async fn delete_equipment(&self, context: &AccessContext, id: Uuid) -> AppResult<()> {
        let equipment = self.get_equipment(context, id).await?;

        EquipmentRepository::delete_by_id(&self.db, equipment.id).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Equipment deleted",
            "equipment_id" => id
        );

        Ok(())
    }
}
