// src/api/dto/subdivision_dto.rs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubdivisionRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    pub short_name: Option<String>,
    pub organization_id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSubdivisionRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub short_name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SubdivisionListQuery {
    pub organization_id: Option<Uuid>,
}
