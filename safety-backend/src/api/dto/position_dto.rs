// src/api/dto/position_dto.rs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePositionRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    pub organization_id: Uuid,
    pub subdivision_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub electrical_safety_group: Option<String>,
    #[serde(default)]
    pub is_safety_responsible: bool,
    pub safety_instructions: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePositionRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub electrical_safety_group: Option<String>,
    pub is_safety_responsible: Option<bool>,
    pub safety_instructions: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PositionListQuery {
    pub search: Option<String>,
}
