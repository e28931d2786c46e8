// src/service/employee_service.rs

use crate::access::resolver::ScopeColumns;
use crate::access::scope::{HierarchyScoped, ScopeRef};
use crate::access::{AccessContext, AccessControlService};
use crate::domain::employee_model;
use crate::domain::employee_status::EmployeeStatus;
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::{
    employee_repository::EmployeeRepository, position_repository::PositionRepository,
};
use crate::service::scope_validation::validate_scope_assignment;
use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

pub struct EmployeeService {
    db: DatabaseConnection,
    access: Arc<AccessControlService>,
}

fn scope_columns() -> ScopeColumns<employee_model::Column> {
    ScopeColumns {
        organization: Some(employee_model::Column::OrganizationId),
        subdivision: Some(employee_model::Column::SubdivisionId),
        department: Some(employee_model::Column::DepartmentId),
    }
}

/// 従業員作成の入力
pub struct NewEmployee {
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub organization_id: Uuid,
    pub subdivision_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub position_id: Uuid,
    pub status: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub height: Option<String>,
    pub clothing_size: Option<String>,
    pub shoe_size: Option<String>,
}

/// 従業員更新の入力（指定フィールドのみ変更）
#[derive(Default)]
pub struct EmployeeUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub position_id: Option<Uuid>,
    pub status: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub height: Option<String>,
    pub clothing_size: Option<String>,
    pub shoe_size: Option<String>,
}

impl EmployeeService {
    pub fn new(db: DatabaseConnection, access: Arc<AccessControlService>) -> Self {
        Self { db, access }
    }

    pub async fn list_employees(
        &self,
        context: &AccessContext,
        search: Option<&str>,
        status: Option<&str>,
        page: i32,
        per_page: i32,
    ) -> AppResult<(Vec<employee_model::Model>, u64)> {
        if let Some(status) = status {
            if EmployeeStatus::from_str(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Unknown employee status: {}",
                    status
                )));
            }
        }

        let condition = self
            .access
            .scope_condition(context, scope_columns())
            .await?;

        EmployeeRepository::find_scoped(&self.db, condition, search, status, page, per_page).await
    }

    pub async fn get_employee(
        &self,
        context: &AccessContext,
        id: Uuid,
    ) -> AppResult<employee_model::Model> {
        let employee = EmployeeRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

        self.access
            .ensure_can_access(context, &employee.scope_ref())
            .await?;

        Ok(employee)
    }

    pub async fn create_employee(
        &self,
        context: &AccessContext,
        input: NewEmployee,
    ) -> AppResult<employee_model::Model> {
        validate_scope_assignment(
            &self.db,
            input.organization_id,
            input.subdivision_id,
            input.department_id,
        )
        .await?;

        // 作成先のスコープにアクセスできること
        let target_scope = ScopeRef {
            organization: Some(input.organization_id),
            subdivision: input.subdivision_id,
            department: input.department_id,
        };
        self.access.ensure_can_access(context, &target_scope).await?;

        let position = PositionRepository::find_by_id(&self.db, input.position_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Position not found".to_string()))?;

        // 役職は同じ組織のものであること
        if position.organization_id != input.organization_id {
            return Err(AppError::ValidationError(
                "Position must belong to the employee's organization".to_string(),
            ));
        }

        let status = match input.status.as_deref() {
            Some(status) => EmployeeStatus::from_str(status)
                .ok_or_else(|| {
                    AppError::ValidationError(format!("Unknown employee status: {}", status))
                })?
                .as_str()
                .to_string(),
            None => EmployeeStatus::Active.as_str().to_string(),
        };

        let employee = employee_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(input.full_name),
            date_of_birth: Set(input.date_of_birth),
            email: Set(input.email),
            organization_id: Set(input.organization_id),
            subdivision_id: Set(input.subdivision_id),
            department_id: Set(input.department_id),
            position_id: Set(input.position_id),
            status: Set(status),
            hire_date: Set(input.hire_date),
            height: Set(input.height),
            clothing_size: Set(input.clothing_size),
            shoe_size: Set(input.shoe_size),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        let employee = EmployeeRepository::create(&self.db, employee).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Employee created",
            "employee_id" => employee.id,
            "organization_id" => employee.organization_id
        );

        Ok(employee)
    }

    pub async fn update_employee(
        &self,
        context: &AccessContext,
        id: Uuid,
        update: EmployeeUpdate,
    ) -> AppResult<employee_model::Model> {
        let employee = self.get_employee(context, id).await?;
        let organization_id = employee.organization_id;

        if let Some(position_id) = update.position_id {
            let position = PositionRepository::find_by_id(&self.db, position_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Position not found".to_string()))?;

            if position.organization_id != organization_id {
                return Err(AppError::ValidationError(
                    "Position must belong to the employee's organization".to_string(),
                ));
            }
        }

        let status = match update.status.as_deref() {
            Some(status) => Some(
                EmployeeStatus::from_str(status)
                    .ok_or_else(|| {
                        AppError::ValidationError(format!("Unknown employee status: {}", status))
                    })?
                    .as_str()
                    .to_string(),
            ),
            None => None,
        };

        let mut active_model: employee_model::ActiveModel = employee.into();

        if let Some(full_name) = update.full_name {
            active_model.full_name = Set(full_name);
        }
        if let Some(email) = update.email {
            active_model.email = Set(Some(email));
        }
        if let Some(position_id) = update.position_id {
            active_model.position_id = Set(position_id);
        }
        if let Some(status) = status {
            active_model.status = Set(status);
        }
        if let Some(hire_date) = update.hire_date {
            active_model.hire_date = Set(Some(hire_date));
        }
        if let Some(height) = update.height {
            active_model.height = Set(Some(height));
        }
        if let Some(clothing_size) = update.clothing_size {
            active_model.clothing_size = Set(Some(clothing_size));
        }
        if let Some(shoe_size) = update.shoe_size {
            active_model.shoe_size = Set(Some(shoe_size));
        }
        active_model.updated_at = Set(Utc::now());

        EmployeeRepository::update_by_id(&self.db, id, active_model).await
    }

    /// 従業員の異動（スコープの付け替え）
    pub async fn transfer_employee(
        &self,
        context: &AccessContext,
        id: Uuid,
        organization_id: Uuid,
        subdivision_id: Option<Uuid>,
        department_id: Option<Uuid>,
    ) -> AppResult<employee_model::Model> {
        let employee = self.get_employee(context, id).await?;

        validate_scope_assignment(&self.db, organization_id, subdivision_id, department_id)
            .await?;

        // 異動先のスコープにもアクセスできること
        let target_scope = ScopeRef {
            organization: Some(organization_id),
            subdivision: subdivision_id,
            department: department_id,
        };
        self.access.ensure_can_access(context, &target_scope).await?;

        let mut active_model: employee_model::ActiveModel = employee.into();
        active_model.organization_id = Set(organization_id);
        active_model.subdivision_id = Set(subdivision_id);
        active_model.department_id = Set(department_id);
        active_model.updated_at = Set(Utc::now());

        let employee = EmployeeRepository::update_by_id(&self.db, id, active_model).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Employee transferred",
            "employee_id" => id,
            "organization_id" => organization_id
        );

        Ok(employee)
    }

    pub async fn delete_employee(&self, context: &AccessContext, id: Uuid) -> AppResult<()> {
        let employee = self.get_employee(context, id).await?;

        EmployeeRepository::delete_by_id(&self.db, employee.id).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Employee deleted",
            "employee_id" => id
        );

        Ok(())
    }
}
