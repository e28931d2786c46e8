// src/api/dto/access_profile_dto.rs

use crate::service::access_profile_service::ProfileGrants;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 3レベルの付与リストをまとめて置き換えるリクエスト
#[derive(Debug, Deserialize, Default)]
pub struct ReplaceGrantsRequest {
    #[serde(default)]
    pub organizations: Vec<Uuid>,
    #[serde(default)]
    pub subdivisions: Vec<Uuid>,
    #[serde(default)]
    pub departments: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct SetProfileActiveRequest {
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct ProfileGrantsResponse {
    pub user_id: Uuid,
    pub is_active: bool,
    pub organizations: Vec<Uuid>,
    pub subdivisions: Vec<Uuid>,
    pub departments: Vec<Uuid>,
}

impl From<ProfileGrants> for ProfileGrantsResponse {
    fn from(grants: ProfileGrants) -> Self {
        let mut organizations: Vec<Uuid> = grants.grants.organizations.into_iter().collect();
        let mut subdivisions: Vec<Uuid> = grants.grants.subdivisions.into_iter().collect();
        let mut departments: Vec<Uuid> = grants.grants.departments.into_iter().collect();

        // レスポンスを決定的にするためソート
        organizations.sort();
        subdivisions.sort();
        departments.sort();

        Self {
            user_id: grants.user_id,
            is_active: grants.is_active,
            organizations,
            subdivisions,
            departments,
        }
    }
}
