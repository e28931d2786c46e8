use crate::domain::employee_model::{self, Entity as Employee};
use crate::error::AppError;
use sea_orm::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct EmployeeRepository;

impl EmployeeRepository {
    pub async fn create(
        db: &DatabaseConnection,
        employee: employee_model::ActiveModel,
    ) -> Result<employee_model::Model, AppError> {
        let result = employee.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<employee_model::Model>, AppError> {
        let result = Employee::find_by_id(id).one(db).await?;
        Ok(result)
    }

    /// スコープ条件付きの一覧（ページネーション・検索・ステータス絞り込み付き）
    pub async fn find_scoped(
        db: &DatabaseConnection,
        scope_condition: Condition,
        search: Option<&str>,
        status: Option<&str>,
        page: i32,
        per_page: i32,
    ) -> Result<(Vec<employee_model::Model>, u64), AppError> {
        let mut condition = Condition::all().add(scope_condition);

        if let Some(search_term) = search {
            let search_pattern = format!("%{}%", search_term);
            condition = condition.add(employee_model::Column::FullName.like(&search_pattern));
        }

        if let Some(status) = status {
            condition = condition.add(employee_model::Column::Status.eq(status));
        }

        let query = Employee::find()
            .filter(condition)
            .order_by_asc(employee_model::Column::FullName);

        let paginator = query.paginate(db, per_page as u64);
        let total_count = paginator.num_items().await?;
        let employees = paginator.fetch_page((page - 1) as u64).await?;

        Ok((employees, total_count))
    }

    pub async fn update_by_id(
        db: &DatabaseConnection,
        id: Uuid,
        employee: employee_model::ActiveModel,
    ) -> Result<employee_model::Model, AppError> {
        let mut active_model = employee;
        active_model.id = sea_orm::Set(id);
        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        Employee::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
