// src/service/access_profile_service.rs

use crate::access::scope::GrantSet;
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::{
    access_profile_repository::AccessProfileRepository,
    department_repository::DepartmentRepository, organization_repository::OrganizationRepository,
    subdivision_repository::SubdivisionRepository,
};
use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use uuid::Uuid;

pub struct AccessProfileService {
    db: DatabaseConnection,
}

/// プロファイルと付与の現況
pub struct ProfileGrants {
    pub profile_id: Uuid,
    pub user_id: Uuid,
    pub is_active: bool,
    pub grants: GrantSet,
}

impl AccessProfileService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_grants(&self, user_id: Uuid) -> AppResult<ProfileGrants> {
        let profile = AccessProfileRepository::find_by_user_id(&self.db, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Access profile not found".to_string()))?;

        let grants = AccessProfileRepository::find_grant_set(&self.db, profile.id).await?;

        Ok(ProfileGrants {
            profile_id: profile.id,
            user_id: profile.user_id,
            is_active: profile.is_active,
            grants,
        })
    }

    /// 3レベルの付与リストを置き換える
    ///
    /// 存在しないIDが混ざっている場合は何も変更せずエラーを返す。
    pub async fn replace_grants(
        &self,
        user_id: Uuid,
        organizations: HashSet<Uuid>,
        subdivisions: HashSet<Uuid>,
        departments: HashSet<Uuid>,
    ) -> AppResult<ProfileGrants> {
        let profile = AccessProfileRepository::find_by_user_id(&self.db, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Access profile not found".to_string()))?;

        let known_organizations =
            OrganizationRepository::find_by_ids(&self.db, &organizations).await?;
        if known_organizations.len() != organizations.len() {
            return Err(AppError::BadRequest(
                "Grant list contains unknown organizations".to_string(),
            ));
        }

        let known_subdivisions =
            SubdivisionRepository::find_by_ids(&self.db, &subdivisions).await?;
        if known_subdivisions.len() != subdivisions.len() {
            return Err(AppError::BadRequest(
                "Grant list contains unknown subdivisions".to_string(),
            ));
        }

        let known_departments = DepartmentRepository::find_by_ids(&self.db, &departments).await?;
        if known_departments.len() != departments.len() {
            return Err(AppError::BadRequest(
                "Grant list contains unknown departments".to_string(),
            ));
        }

        AccessProfileRepository::replace_grants(
            &self.db,
            profile.id,
            &organizations,
            &subdivisions,
            &departments,
        )
        .await?;

        // 冗長な付与の警告（組織が付与済みならその部門・課の付与は不要）
        self.warn_redundant_grants(
            user_id,
            &organizations,
            &known_subdivisions,
            &known_departments,
        );

        self.get_grants(user_id).await
    }

    pub async fn set_active(&self, user_id: Uuid, is_active: bool) -> AppResult<ProfileGrants> {
        let profile = AccessProfileRepository::find_by_user_id(&self.db, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Access profile not found".to_string()))?;

        AccessProfileRepository::set_active(&self.db, profile.id, is_active).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Access profile activation changed",
            "user_id" => user_id,
            "is_active" => is_active
        );

        self.get_grants(user_id).await
    }

    fn warn_redundant_grants(
        &self,
        user_id: Uuid,
        organizations: &HashSet<Uuid>,
        subdivisions: &[crate::domain::subdivision_model::Model],
        departments: &[crate::domain::department_model::Model],
    ) {
        for subdivision in subdivisions {
            if organizations.contains(&subdivision.organization_id) {
                log_with_context!(
                    tracing::Level::WARN,
                    "Redundant subdivision grant, organization already granted",
                    "user_id" => user_id,
                    "subdivision_id" => subdivision.id
                );
            }
        }

        for department in departments {
            if organizations.contains(&department.organization_id) {
                log_with_context!(
                    tracing::Level::WARN,
                    "Redundant department grant, organization already granted",
                    "user_id" => user_id,
                    "department_id" => department.id
                );
            }
        }
    }
}
