use crate::domain::subdivision_model::{self, Entity as Subdivision};
use crate::domain::{department_model, employee_model, equipment_model, position_model};
use crate::error::AppError;
use sea_orm::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashSet;
use uuid::Uuid;

pub struct SubdivisionRepository;

impl SubdivisionRepository {
    pub async fn create(
        db: &DatabaseConnection,
        subdivision: subdivision_model::ActiveModel,
    ) -> Result<subdivision_model::Model, AppError> {
        let result = subdivision.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<subdivision_model::Model>, AppError> {
        let result = Subdivision::find_by_id(id).one(db).await?;
        Ok(result)
    }

    pub async fn find_by_ids(
        db: &DatabaseConnection,
        ids: &HashSet<Uuid>,
    ) -> Result<Vec<subdivision_model::Model>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Subdivision::find()
            .filter(subdivision_model::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(subdivision_model::Column::Name)
            .all(db)
            .await?;
        Ok(result)
    }

    pub async fn find_all_ids(db: &DatabaseConnection) -> Result<HashSet<Uuid>, AppError> {
        let ids: Vec<Uuid> = Subdivision::find()
            .select_only()
            .column(subdivision_model::Column::Id)
            .into_tuple()
            .all(db)
            .await?;
        Ok(ids.into_iter().collect())
    }

    /// 指定組織群に属する部門のID集合（スコープ閉包計算用）
    pub async fn find_ids_by_organization_ids(
        db: &DatabaseConnection,
        organization_ids: &HashSet<Uuid>,
    ) -> Result<HashSet<Uuid>, AppError> {
        if organization_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<Uuid> = Subdivision::find()
            .select_only()
            .column(subdivision_model::Column::Id)
            .filter(
                subdivision_model::Column::OrganizationId.is_in(organization_ids.iter().copied()),
            )
            .into_tuple()
            .all(db)
            .await?;
        Ok(ids.into_iter().collect())
    }

    /// 可視ID集合による一覧（組織での絞り込みは任意）
    pub async fn find_visible(
        db: &DatabaseConnection,
        visible_ids: Option<&HashSet<Uuid>>,
        organization_id: Option<Uuid>,
    ) -> Result<Vec<subdivision_model::Model>, AppError> {
        let mut query = Subdivision::find();

        if let Some(ids) = visible_ids {
            if ids.is_empty() {
                return Ok(Vec::new());
            }
            query = query.filter(subdivision_model::Column::Id.is_in(ids.iter().copied()));
        }

        if let Some(organization_id) = organization_id {
            query =
                query.filter(subdivision_model::Column::OrganizationId.eq(organization_id));
        }

        let result = query
            .order_by_asc(subdivision_model::Column::Name)
            .all(db)
            .await?;
        Ok(result)
    }

    pub async fn find_by_name_and_organization(
        db: &DatabaseConnection,
        name: &str,
        organization_id: Uuid,
    ) -> Result<Option<subdivision_model::Model>, AppError> {
        let result = Subdivision::find()
            .filter(subdivision_model::Column::Name.eq(name))
            .filter(subdivision_model::Column::OrganizationId.eq(organization_id))
            .one(db)
            .await?;
        Ok(result)
    }

    pub async fn update_by_id(
        db: &DatabaseConnection,
        id: Uuid,
        subdivision: subdivision_model::ActiveModel,
    ) -> Result<subdivision_model::Model, AppError> {
        let mut active_model = subdivision;
        active_model.id = sea_orm::Set(id);
        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        Subdivision::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// 他レコードから参照されているか（参照中は削除不可）
    pub async fn is_referenced(db: &DatabaseConnection, id: Uuid) -> Result<bool, AppError> {
        let departments = department_model::Entity::find()
            .filter(department_model::Column::SubdivisionId.eq(id))
            .count(db)
            .await?;
        if departments > 0 {
            return Ok(true);
        }

        let positions = position_model::Entity::find()
            .filter(position_model::Column::SubdivisionId.eq(id))
            .count(db)
            .await?;
        if positions > 0 {
            return Ok(true);
        }

        let employees = employee_model::Entity::find()
            .filter(employee_model::Column::SubdivisionId.eq(id))
            .count(db)
            .await?;
        if employees > 0 {
            return Ok(true);
        }

        let equipment = equipment_model::Entity::find()
            .filter(equipment_model::Column::SubdivisionId.eq(id))
            .count(db)
            .await?;

        Ok(equipment > 0)
    }
}
