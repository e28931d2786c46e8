// src/api/dto/equipment_dto.rs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEquipmentRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Inventory number must be 1-100 characters"))]
    pub inventory_number: String,
    pub equipment_type: Option<String>,
    pub organization_id: Uuid,
    pub subdivision_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub maintenance_period_months: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateEquipmentRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub equipment_type: Option<String>,
    pub maintenance_period_months: Option<i32>,
    pub maintenance_status: Option<String>,
}

/// 保守実施の記録リクエスト
#[derive(Debug, Deserialize)]
pub struct RecordMaintenanceRequest {
    pub performed_on: NaiveDate,
}

#[derive(Debug, Deserialize, Default)]
pub struct EquipmentListQuery {
    pub search: Option<String>,
    pub maintenance_status: Option<String>,
}
