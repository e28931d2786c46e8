// src/service/siz_service.rs

use crate::access::resolver::ScopeColumns;
use crate::access::scope::HierarchyScoped;
use crate::access::{AccessContext, AccessControlService};
use crate::domain::siz_item_model::{self, WearType};
use crate::domain::{employee_model, position_model, siz_issue_model, siz_norm_model};
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::position_repository::PositionRepository;
use crate::repository::siz_repository::{SizIssueRepository, SizItemRepository, SizNormRepository};
use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

pub struct SizService {
    db: DatabaseConnection,
    access: Arc<AccessControlService>,
}

fn employee_scope_columns() -> ScopeColumns<employee_model::Column> {
    ScopeColumns {
        organization: Some(employee_model::Column::OrganizationId),
        subdivision: Some(employee_model::Column::SubdivisionId),
        department: Some(employee_model::Column::DepartmentId),
    }
}

fn position_scope_columns() -> ScopeColumns<position_model::Column> {
    ScopeColumns {
        organization: Some(position_model::Column::OrganizationId),
        subdivision: Some(position_model::Column::SubdivisionId),
        department: Some(position_model::Column::DepartmentId),
    }
}

impl SizService {
    pub fn new(db: DatabaseConnection, access: Arc<AccessControlService>) -> Self {
        Self { db, access }
    }

    // --- カタログ: 保護具 ---

    pub async fn list_items(&self) -> AppResult<Vec<siz_item_model::Model>> {
        SizItemRepository::find_all(&self.db).await
    }

    pub async fn create_item(
        &self,
        name: String,
        classification: String,
        unit: String,
        wear_period_months: i32,
        wear_type: String,
    ) -> AppResult<siz_item_model::Model> {
        if wear_period_months < 0 {
            return Err(AppError::ValidationError(
                "Wear period cannot be negative".to_string(),
            ));
        }

        let wear_type = WearType::from_str(&wear_type)
            .ok_or_else(|| {
                AppError::ValidationError(format!("Unknown wear type: {}", wear_type))
            })?
            .as_str()
            .to_string();

        let item = siz_item_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            classification: Set(classification),
            unit: Set(unit),
            wear_period_months: Set(wear_period_months),
            wear_type: Set(wear_type),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        SizItemRepository::create(&self.db, item).await
    }

    pub async fn delete_item(&self, id: Uuid) -> AppResult<()> {
        if SizItemRepository::find_by_id(&self.db, id).await?.is_none() {
            return Err(AppError::NotFound("SIZ item not found".to_string()));
        }

        if SizItemRepository::is_referenced(&self.db, id).await? {
            return Err(AppError::Conflict(
                "SIZ item is referenced by norms or issues and cannot be deleted".to_string(),
            ));
        }

        SizItemRepository::delete_by_id(&self.db, id).await
    }

    // --- 支給基準 ---

    pub async fn list_norms(
        &self,
        context: &AccessContext,
        position_id: Option<Uuid>,
    ) -> AppResult<Vec<siz_norm_model::Model>> {
        // 支給基準は役職スコープで絞る
        let condition = self
            .access
            .scope_condition(context, position_scope_columns())
            .await?;

        SizNormRepository::find_scoped(&self.db, condition, position_id).await
    }

    pub async fn create_norm(
        &self,
        context: &AccessContext,
        position_id: Uuid,
        siz_item_id: Uuid,
        quantity: i32,
        condition: Option<String>,
    ) -> AppResult<siz_norm_model::Model> {
        if quantity <= 0 {
            return Err(AppError::ValidationError(
                "Quantity must be positive".to_string(),
            ));
        }

        let position = PositionRepository::find_by_id(&self.db, position_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Position not found".to_string()))?;

        self.access
            .ensure_can_access(context, &position.scope_ref())
            .await?;

        if SizItemRepository::find_by_id(&self.db, siz_item_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("SIZ item not found".to_string()));
        }

        if SizNormRepository::find_duplicate(
            &self.db,
            position_id,
            siz_item_id,
            condition.as_deref(),
        )
        .await?
        .is_some()
        {
            return Err(AppError::Conflict(
                "Norm for this position, item and condition already exists".to_string(),
            ));
        }

        let norm = siz_norm_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            position_id: Set(position_id),
            siz_item_id: Set(siz_item_id),
            quantity: Set(quantity),
            condition: Set(condition),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        let norm = SizNormRepository::create(&self.db, norm).await?;

        log_with_context!(
            tracing::Level::INFO,
            "SIZ norm created",
            "norm_id" => norm.id,
            "position_id" => position_id,
            "siz_item_id" => siz_item_id
        );

        Ok(norm)
    }

    pub async fn delete_norm(&self, context: &AccessContext, id: Uuid) -> AppResult<()> {
        let norm = SizNormRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("SIZ norm not found".to_string()))?;

        // 基準の可視性は役職のスコープに従う
        let position = PositionRepository::find_by_id(&self.db, norm.position_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Position not found".to_string()))?;
        self.access
            .ensure_can_access(context, &position.scope_ref())
            .await?;

        SizNormRepository::delete_by_id(&self.db, id).await
    }

    // --- 支給記録 ---

    pub async fn list_issues(
        &self,
        context: &AccessContext,
        employee_id: Option<Uuid>,
        outstanding_only: bool,
        page: i32,
        per_page: i32,
    ) -> AppResult<(Vec<siz_issue_model::Model>, u64)> {
        // 支給記録は従業員スコープで絞る
        let condition = self
            .access
            .scope_condition(context, employee_scope_columns())
            .await?;

        SizIssueRepository::find_scoped(
            &self.db,
            condition,
            employee_id,
            outstanding_only,
            page,
            per_page,
        )
        .await
    }

    pub async fn create_issue(
        &self,
        context: &AccessContext,
        employee_id: Uuid,
        siz_item_id: Uuid,
        issue_date: NaiveDate,
        quantity: i32,
        wear_percent: i32,
    ) -> AppResult<siz_issue_model::Model> {
        if quantity <= 0 {
            return Err(AppError::ValidationError(
                "Quantity must be positive".to_string(),
            ));
        }

        if !(0..=100).contains(&wear_percent) {
            return Err(AppError::ValidationError(
                "Wear percent must be between 0 and 100".to_string(),
            ));
        }

        self.ensure_employee_access(context, employee_id).await?;

        if SizItemRepository::find_by_id(&self.db, siz_item_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("SIZ item not found".to_string()));
        }

        let issue = siz_issue_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            employee_id: Set(employee_id),
            siz_item_id: Set(siz_item_id),
            issue_date: Set(issue_date),
            quantity: Set(quantity),
            wear_percent: Set(wear_percent),
            return_date: Set(None),
            is_returned: Set(false),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        let issue = SizIssueRepository::create(&self.db, issue).await?;

        log_with_context!(
            tracing::Level::INFO,
            "SIZ issued to employee",
            "issue_id" => issue.id,
            "employee_id" => employee_id,
            "siz_item_id" => siz_item_id
        );

        Ok(issue)
    }

    /// 保護具の返却記録
    pub async fn return_issue(
        &self,
        context: &AccessContext,
        id: Uuid,
        return_date: NaiveDate,
    ) -> AppResult<siz_issue_model::Model> {
        let issue = SizIssueRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("SIZ issue not found".to_string()))?;

        self.ensure_employee_access(context, issue.employee_id)
            .await?;

        if issue.is_returned {
            return Err(AppError::Conflict(
                "SIZ issue is already returned".to_string(),
            ));
        }

        if return_date < issue.issue_date {
            return Err(AppError::ValidationError(
                "Return date cannot be before the issue date".to_string(),
            ));
        }

        let mut active_model: siz_issue_model::ActiveModel = issue.into();
        active_model.return_date = Set(Some(return_date));
        active_model.is_returned = Set(true);
        active_model.updated_at = Set(Utc::now());

        let issue = SizIssueRepository::update_by_id(&self.db, id, active_model).await?;

        log_with_context!(
            tracing::Level::INFO,
            "SIZ issue returned",
            "issue_id" => id,
            "return_date" => return_date
        );

        Ok(issue)
    }

    pub async fn delete_issue(&self, context: &AccessContext, id: Uuid) -> AppResult<()> {
        let issue = SizIssueRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("SIZ issue not found".to_string()))?;

        self.ensure_employee_access(context, issue.employee_id)
            .await?;

        SizIssueRepository::delete_by_id(&self.db, id).await
    }

    async fn ensure_employee_access(
        &self,
        context: &AccessContext,
        employee_id: Uuid,
    ) -> AppResult<()> {
        let employee = EmployeeRepository::find_by_id(&self.db, employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

        self.access
            .ensure_can_access(context, &employee.scope_ref())
            .await
    }
}
