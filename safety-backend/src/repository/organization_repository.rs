use crate::domain::organization_model::{self, Entity as Organization};
use crate::domain::{
    department_model, employee_model, equipment_model, position_model, subdivision_model,
};
use crate::error::AppError;
use sea_orm::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashSet;
use uuid::Uuid;

pub struct OrganizationRepository;

impl OrganizationRepository {
    pub async fn create(
        db: &DatabaseConnection,
        organization: organization_model::ActiveModel,
    ) -> Result<organization_model::Model, AppError> {
        let result = organization.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<organization_model::Model>, AppError> {
        let result = Organization::find_by_id(id).one(db).await?;
        Ok(result)
    }

    pub async fn find_all(
        db: &DatabaseConnection,
    ) -> Result<Vec<organization_model::Model>, AppError> {
        let result = Organization::find()
            .order_by_asc(organization_model::Column::FullName)
            .all(db)
            .await?;
        Ok(result)
    }

    pub async fn find_all_ids(db: &DatabaseConnection) -> Result<HashSet<Uuid>, AppError> {
        let ids: Vec<Uuid> = Organization::find()
            .select_only()
            .column(organization_model::Column::Id)
            .into_tuple()
            .all(db)
            .await?;
        Ok(ids.into_iter().collect())
    }

    pub async fn find_by_ids(
        db: &DatabaseConnection,
        ids: &HashSet<Uuid>,
    ) -> Result<Vec<organization_model::Model>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Organization::find()
            .filter(organization_model::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(organization_model::Column::FullName)
            .all(db)
            .await?;
        Ok(result)
    }

    pub async fn update_by_id(
        db: &DatabaseConnection,
        id: Uuid,
        organization: organization_model::ActiveModel,
    ) -> Result<organization_model::Model, AppError> {
        let mut active_model = organization;
        active_model.id = sea_orm::Set(id);
        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        Organization::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// 他レコードから参照されているか（参照中は削除不可）
    pub async fn is_referenced(db: &DatabaseConnection, id: Uuid) -> Result<bool, AppError> {
        let subdivisions = subdivision_model::Entity::find()
            .filter(subdivision_model::Column::OrganizationId.eq(id))
            .count(db)
            .await?;
        if subdivisions > 0 {
            return Ok(true);
        }

        let departments = department_model::Entity::find()
            .filter(department_model::Column::OrganizationId.eq(id))
            .count(db)
            .await?;
        if departments > 0 {
            return Ok(true);
        }

        let positions = position_model::Entity::find()
            .filter(position_model::Column::OrganizationId.eq(id))
            .count(db)
            .await?;
        if positions > 0 {
            return Ok(true);
        }

        let employees = employee_model::Entity::find()
            .filter(employee_model::Column::OrganizationId.eq(id))
            .count(db)
            .await?;
        if employees > 0 {
            return Ok(true);
        }

        let equipment = equipment_model::Entity::find()
            .filter(equipment_model::Column::OrganizationId.eq(id))
            .count(db)
            .await?;

        Ok(equipment > 0)
    }
}
