use crate::access::scope::GrantSet;
use crate::domain::access_grant_model::{department_grant, organization_grant, subdivision_grant};
use crate::domain::access_profile_model::{self, Entity as AccessProfile};
use crate::error::AppError;
use sea_orm::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashSet;
use uuid::Uuid;

pub struct AccessProfileRepository;

impl AccessProfileRepository {
    pub async fn create(
        db: &DatabaseConnection,
        profile: access_profile_model::ActiveModel,
    ) -> Result<access_profile_model::Model, AppError> {
        let result = profile.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_user_id(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<Option<access_profile_model::Model>, AppError> {
        let result = AccessProfile::find()
            .filter(access_profile_model::Column::UserId.eq(user_id))
            .one(db)
            .await?;
        Ok(result)
    }

    /// プロファイルの3レベルの直接付与をまとめて取得
    pub async fn find_grant_set(
        db: &DatabaseConnection,
        profile_id: Uuid,
    ) -> Result<GrantSet, AppError> {
        let organizations: Vec<Uuid> = organization_grant::Entity::find()
            .select_only()
            .column(organization_grant::Column::OrganizationId)
            .filter(organization_grant::Column::ProfileId.eq(profile_id))
            .into_tuple()
            .all(db)
            .await?;

        let subdivisions: Vec<Uuid> = subdivision_grant::Entity::find()
            .select_only()
            .column(subdivision_grant::Column::SubdivisionId)
            .filter(subdivision_grant::Column::ProfileId.eq(profile_id))
            .into_tuple()
            .all(db)
            .await?;

        let departments: Vec<Uuid> = department_grant::Entity::find()
            .select_only()
            .column(department_grant::Column::DepartmentId)
            .filter(department_grant::Column::ProfileId.eq(profile_id))
            .into_tuple()
            .all(db)
            .await?;

        Ok(GrantSet {
            organizations: organizations.into_iter().collect(),
            subdivisions: subdivisions.into_iter().collect(),
            departments: departments.into_iter().collect(),
        })
    }

    /// 3レベルの付与リストをまとめて置き換える（トランザクション内）
    pub async fn replace_grants(
        db: &DatabaseConnection,
        profile_id: Uuid,
        organizations: &HashSet<Uuid>,
        subdivisions: &HashSet<Uuid>,
        departments: &HashSet<Uuid>,
    ) -> Result<(), AppError> {
        let txn = db.begin().await?;

        organization_grant::Entity::delete_many()
            .filter(organization_grant::Column::ProfileId.eq(profile_id))
            .exec(&txn)
            .await?;
        subdivision_grant::Entity::delete_many()
            .filter(subdivision_grant::Column::ProfileId.eq(profile_id))
            .exec(&txn)
            .await?;
        department_grant::Entity::delete_many()
            .filter(department_grant::Column::ProfileId.eq(profile_id))
            .exec(&txn)
            .await?;

        if !organizations.is_empty() {
            let rows = organizations.iter().map(|id| organization_grant::ActiveModel {
                profile_id: Set(profile_id),
                organization_id: Set(*id),
            });
            organization_grant::Entity::insert_many(rows).exec(&txn).await?;
        }

        if !subdivisions.is_empty() {
            let rows = subdivisions.iter().map(|id| subdivision_grant::ActiveModel {
                profile_id: Set(profile_id),
                subdivision_id: Set(*id),
            });
            subdivision_grant::Entity::insert_many(rows).exec(&txn).await?;
        }

        if !departments.is_empty() {
            let rows = departments.iter().map(|id| department_grant::ActiveModel {
                profile_id: Set(profile_id),
                department_id: Set(*id),
            });
            department_grant::Entity::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn set_active(
        db: &DatabaseConnection,
        profile_id: Uuid,
        is_active: bool,
    ) -> Result<access_profile_model::Model, AppError> {
        let profile = AccessProfile::find_by_id(profile_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Access profile not found".to_string()))?;

        let mut active_model: access_profile_model::ActiveModel = profile.into();
        active_model.is_active = Set(is_active);
        active_model.updated_at = Set(chrono::Utc::now());
        let result = active_model.update(db).await?;
        Ok(result)
    }
}
