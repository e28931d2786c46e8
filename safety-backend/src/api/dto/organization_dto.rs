// src/api/dto/organization_dto.rs

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrganizationRequest {
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: String,
    #[validate(length(min = 1, max = 100, message = "Short name must be 1-100 characters"))]
    pub short_name: String,
    pub requisites: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOrganizationRequest {
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Short name must be 1-100 characters"))]
    pub short_name: Option<String>,
    pub requisites: Option<String>,
    pub location: Option<String>,
}
