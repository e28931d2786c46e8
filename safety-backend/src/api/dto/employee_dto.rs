// src/api/dto/employee_dto.rs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub organization_id: Uuid,
    pub subdivision_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub position_id: Uuid,
    pub status: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub height: Option<String>,
    pub clothing_size: Option<String>,
    pub shoe_size: Option<String>,
}

#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub position_id: Option<Uuid>,
    pub status: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub height: Option<String>,
    pub clothing_size: Option<String>,
    pub shoe_size: Option<String>,
}

/// 異動リクエスト（スコープの付け替え）
#[derive(Debug, Deserialize)]
pub struct TransferEmployeeRequest {
    pub organization_id: Uuid,
    pub subdivision_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Default)]
pub struct EmployeeListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}
