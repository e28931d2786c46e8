// src/api/dto/department_dto.rs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    pub short_name: Option<String>,
    pub organization_id: Uuid,
    pub subdivision_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub short_name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DepartmentListQuery {
    pub organization_id: Option<Uuid>,
    pub subdivision_id: Option<Uuid>,
}
