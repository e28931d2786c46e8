use crate::domain::siz_issue_model::{self, Entity as SizIssue};
use crate::domain::siz_item_model::{self, Entity as SizItem};
use crate::domain::siz_norm_model::{self, Entity as SizNorm};
use crate::error::AppError;
use sea_orm::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

pub struct SizItemRepository;

impl SizItemRepository {
    pub async fn create(
        db: &DatabaseConnection,
        item: siz_item_model::ActiveModel,
    ) -> Result<siz_item_model::Model, AppError> {
        let result = item.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<siz_item_model::Model>, AppError> {
        let result = SizItem::find_by_id(id).one(db).await?;
        Ok(result)
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<siz_item_model::Model>, AppError> {
        let result = SizItem::find()
            .order_by_asc(siz_item_model::Column::Name)
            .all(db)
            .await?;
        Ok(result)
    }

    pub async fn update_by_id(
        db: &DatabaseConnection,
        id: Uuid,
        item: siz_item_model::ActiveModel,
    ) -> Result<siz_item_model::Model, AppError> {
        let mut active_model = item;
        active_model.id = sea_orm::Set(id);
        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        SizItem::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    pub async fn is_referenced(db: &DatabaseConnection, id: Uuid) -> Result<bool, AppError> {
        let norms = SizNorm::find()
            .filter(siz_norm_model::Column::SizItemId.eq(id))
            .count(db)
            .await?;
        if norms > 0 {
            return Ok(true);
        }

        let issues = SizIssue::find()
            .filter(siz_issue_model::Column::SizItemId.eq(id))
            .count(db)
            .await?;
        Ok(issues > 0)
    }
}

pub struct SizNormRepository;

impl SizNormRepository {
    pub async fn create(
        db: &DatabaseConnection,
        norm: siz_norm_model::ActiveModel,
    ) -> Result<siz_norm_model::Model, AppError> {
        let result = norm.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<siz_norm_model::Model>, AppError> {
        let result = SizNorm::find_by_id(id).one(db).await?;
        Ok(result)
    }

    /// 役職スコープ条件付きの一覧
    ///
    /// 支給基準は帰属フィールドを持たないため、役職テーブルへJOINし、
    /// スコープ条件は役職のカラムに対して適用する。
    pub async fn find_scoped(
        db: &DatabaseConnection,
        position_scope_condition: Condition,
        position_id: Option<Uuid>,
    ) -> Result<Vec<siz_norm_model::Model>, AppError> {
        let mut condition = Condition::all().add(position_scope_condition);

        if let Some(position_id) = position_id {
            condition = condition.add(siz_norm_model::Column::PositionId.eq(position_id));
        }

        let result = SizNorm::find()
            .join(JoinType::InnerJoin, siz_norm_model::Relation::Position.def())
            .filter(condition)
            .order_by_asc(siz_norm_model::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(result)
    }

    pub async fn find_duplicate(
        db: &DatabaseConnection,
        position_id: Uuid,
        siz_item_id: Uuid,
        condition_text: Option<&str>,
    ) -> Result<Option<siz_norm_model::Model>, AppError> {
        let mut query = SizNorm::find()
            .filter(siz_norm_model::Column::PositionId.eq(position_id))
            .filter(siz_norm_model::Column::SizItemId.eq(siz_item_id));

        query = match condition_text {
            Some(text) => query.filter(siz_norm_model::Column::Condition.eq(text)),
            None => query.filter(siz_norm_model::Column::Condition.is_null()),
        };

        let result = query.one(db).await?;
        Ok(result)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        SizNorm::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}

pub struct SizIssueRepository;

impl SizIssueRepository {
    pub async fn create(
        db: &DatabaseConnection,
        issue: siz_issue_model::ActiveModel,
    ) -> Result<siz_issue_model::Model, AppError> {
        let result = issue.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<siz_issue_model::Model>, AppError> {
        let result = SizIssue::find_by_id(id).one(db).await?;
        Ok(result)
    }

    /// 従業員スコープ条件付きの一覧
    pub async fn find_scoped(
        db: &DatabaseConnection,
        employee_scope_condition: Condition,
        employee_id: Option<Uuid>,
        outstanding_only: bool,
        page: i32,
        per_page: i32,
    ) -> Result<(Vec<siz_issue_model::Model>, u64), AppError> {
        let mut condition = Condition::all().add(employee_scope_condition);

        if let Some(employee_id) = employee_id {
            condition = condition.add(siz_issue_model::Column::EmployeeId.eq(employee_id));
        }

        if outstanding_only {
            condition = condition.add(siz_issue_model::Column::IsReturned.eq(false));
        }

        let query = SizIssue::find()
            .join(JoinType::InnerJoin, siz_issue_model::Relation::Employee.def())
            .filter(condition)
            .order_by_desc(siz_issue_model::Column::IssueDate);

        let paginator = query.paginate(db, per_page as u64);
        let total_count = paginator.num_items().await?;
        let issues = paginator.fetch_page((page - 1) as u64).await?;

        Ok((issues, total_count))
    }

    pub async fn update_by_id(
        db: &DatabaseConnection,
        id: Uuid,
        issue: siz_issue_model::ActiveModel,
    ) -> Result<siz_issue_model::Model, AppError> {
        let mut active_model = issue;
        active_model.id = sea_orm::Set(id);
        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        SizIssue::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
