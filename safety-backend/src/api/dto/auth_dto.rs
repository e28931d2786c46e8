// src/api/dto/auth_dto.rs

use crate::access::scope::AccessLevel;
use crate::domain::user_model::SafeUser;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub access_token: String,
    pub user: SafeUser,
}

/// 現在のユーザーの解決済みスコープ
#[derive(Debug, Serialize)]
pub struct ScopeSummaryResponse {
    pub access_level: AccessLevel,
    pub organizations: Vec<Uuid>,
    pub subdivisions: Vec<Uuid>,
    pub departments: Vec<Uuid>,
}
