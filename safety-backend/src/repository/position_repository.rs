use crate::domain::employee_model;
use crate::domain::position_model::{self, Entity as Position};
use crate::error::AppError;
use sea_orm::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct PositionRepository;

impl PositionRepository {
    pub async fn create(
        db: &DatabaseConnection,
        position: position_model::ActiveModel,
    ) -> Result<position_model::Model, AppError> {
        let result = position.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<position_model::Model>, AppError> {
        let result = Position::find_by_id(id).one(db).await?;
        Ok(result)
    }

    /// スコープ条件付きの一覧（ページネーション付き）
    pub async fn find_scoped(
        db: &DatabaseConnection,
        scope_condition: Condition,
        search: Option<&str>,
        page: i32,
        per_page: i32,
    ) -> Result<(Vec<position_model::Model>, u64), AppError> {
        let mut condition = Condition::all().add(scope_condition);

        if let Some(search_term) = search {
            let search_pattern = format!("%{}%", search_term);
            condition = condition.add(position_model::Column::Name.like(&search_pattern));
        }

        let query = Position::find()
            .filter(condition)
            .order_by_asc(position_model::Column::Name);

        let paginator = query.paginate(db, per_page as u64);
        let total_count = paginator.num_items().await?;
        let positions = paginator.fetch_page((page - 1) as u64).await?;

        Ok((positions, total_count))
    }

    pub async fn update_by_id(
        db: &DatabaseConnection,
        id: Uuid,
        position: position_model::ActiveModel,
    ) -> Result<position_model::Model, AppError> {
        let mut active_model = position;
        active_model.id = sea_orm::Set(id);
        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        Position::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// 従業員から参照されているか（参照中は削除不可。支給基準はCASCADEで消える）
    pub async fn is_referenced(db: &DatabaseConnection, id: Uuid) -> Result<bool, AppError> {
        let employees = employee_model::Entity::find()
            .filter(employee_model::Column::PositionId.eq(id))
            .count(db)
            .await?;

        Ok(employees > 0)
    }
}
