// src/service/medical_service.rs

use crate::access::resolver::ScopeColumns;
use crate::access::scope::HierarchyScoped;
use crate::access::{AccessContext, AccessControlService};
use crate::domain::medical_examination_model::{self, ExaminationStatus};
use crate::domain::{employee_model, harmful_factor_model, medical_examination_type_model};
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::medical_examination_repository::{
    HarmfulFactorRepository, MedicalExaminationRepository, MedicalExaminationTypeRepository,
};
use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

pub struct MedicalService {
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

/// 検診記録作成の入力
pub struct NewExamination {
    pub employee_id: Uuid,
    pub examination_type_id: Uuid,
    pub harmful_factor_id: Option<Uuid>,
    pub date_completed: Option<NaiveDate>,
    pub next_date: Option<NaiveDate>,
}

impl MedicalService {
    pub fn new(db: DatabaseConnection, access: Arc<AccessControlService>) -> Self {
        Self { db, access }
    }

    // --- カタログ: 検診種別 ---

    pub async fn list_examination_types(
        &self,
    ) -> AppResult<Vec<medical_examination_type_model::Model>> {
        MedicalExaminationTypeRepository::find_all(&self.db).await
    }

    pub async fn create_examination_type(
        &self,
        name: String,
    ) -> AppResult<medical_examination_type_model::Model> {
        if MedicalExaminationTypeRepository::find_by_name(&self.db, &name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Examination type with this name already exists".to_string(),
            ));
        }

        let examination_type = medical_examination_type_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        MedicalExaminationTypeRepository::create(&self.db, examination_type).await
    }

    pub async fn delete_examination_type(&self, id: Uuid) -> AppResult<()> {
        if MedicalExaminationTypeRepository::find_by_id(&self.db, id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Examination type not found".to_string()));
        }

        if MedicalExaminationTypeRepository::is_referenced(&self.db, id).await? {
            return Err(AppError::Conflict(
                "Examination type is referenced by examinations and cannot be deleted"
                    .to_string(),
            ));
        }

        MedicalExaminationTypeRepository::delete_by_id(&self.db, id).await
    }

    // --- カタログ: 有害要因 ---

    pub async fn list_harmful_factors(&self) -> AppResult<Vec<harmful_factor_model::Model>> {
        HarmfulFactorRepository::find_all(&self.db).await
    }

    pub async fn create_harmful_factor(
        &self,
        short_name: String,
        full_name: String,
        periodicity_months: i32,
    ) -> AppResult<harmful_factor_model::Model> {
        if periodicity_months <= 0 {
            return Err(AppError::ValidationError(
                "Periodicity must be positive".to_string(),
            ));
        }

        if HarmfulFactorRepository::find_by_short_name(&self.db, &short_name)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Harmful factor with this short name already exists".to_string(),
            ));
        }

        let factor = harmful_factor_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            short_name: Set(short_name),
            full_name: Set(full_name),
            periodicity_months: Set(periodicity_months),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        HarmfulFactorRepository::create(&self.db, factor).await
    }

    pub async fn delete_harmful_factor(&self, id: Uuid) -> AppResult<()> {
        if HarmfulFactorRepository::find_by_id(&self.db, id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Harmful factor not found".to_string()));
        }

        if HarmfulFactorRepository::is_referenced(&self.db, id).await? {
            return Err(AppError::Conflict(
                "Harmful factor is referenced by examinations and cannot be deleted".to_string(),
            ));
        }

        HarmfulFactorRepository::delete_by_id(&self.db, id).await
    }

    // --- 検診記録 ---

    pub async fn list_examinations(
        &self,
        context: &AccessContext,
        employee_id: Option<Uuid>,
        status: Option<&str>,
        page: i32,
        per_page: i32,
    ) -> AppResult<(Vec<medical_examination_model::Model>, u64)> {
        if let Some(status) = status {
            if ExaminationStatus::from_str(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Unknown examination status: {}",
                    status
                )));
            }
        }

        // 検診記録は従業員スコープで絞る
        let condition = self
            .access
            .scope_condition(context, employee_scope_columns())
            .await?;

        MedicalExaminationRepository::find_scoped(
            &self.db,
            condition,
            employee_id,
            status,
            page,
            per_page,
        )
        .await
    }

    pub async fn get_examination(
        &self,
        context: &AccessContext,
        id: Uuid,
    ) -> AppResult<medical_examination_model::Model> {
        let examination = MedicalExaminationRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Medical examination not found".to_string()))?;

        self.ensure_employee_access(context, examination.employee_id)
            .await?;

        Ok(examination)
    }

    pub async fn create_examination(
        &self,
        context: &AccessContext,
        input: NewExamination,
    ) -> AppResult<medical_examination_model::Model> {
        self.ensure_employee_access(context, input.employee_id)
            .await?;

        if MedicalExaminationTypeRepository::find_by_id(&self.db, input.examination_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Examination type not found".to_string()));
        }

        let harmful_factor = match input.harmful_factor_id {
            Some(factor_id) => Some(
                HarmfulFactorRepository::find_by_id(&self.db, factor_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound("Harmful factor not found".to_string())
                    })?,
            ),
            None => None,
        };

        // next_date 未指定の場合は実施日と有害要因の周期から計算
        let next_date = match input.next_date {
            Some(next_date) => next_date,
            None => {
                let completed_on = input.date_completed.ok_or_else(|| {
                    AppError::BadRequest(
                        "Either next_date or date_completed must be provided".to_string(),
                    )
                })?;
                let periodicity = harmful_factor
                    .as_ref()
                    .map(|factor| factor.periodicity_months)
                    .unwrap_or(12);
                medical_examination_model::Model::compute_next_date(completed_on, periodicity)
                    .ok_or_else(|| {
                        AppError::ValidationError("Invalid examination periodicity".to_string())
                    })?
            }
        };

        let status = if input.date_completed.is_some() {
            ExaminationStatus::Completed
        } else {
            ExaminationStatus::Scheduled
        };

        let examination = medical_examination_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            employee_id: Set(input.employee_id),
            examination_type_id: Set(input.examination_type_id),
            harmful_factor_id: Set(input.harmful_factor_id),
            date_completed: Set(input.date_completed),
            next_date: Set(next_date),
            status: Set(status.as_str().to_string()),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        let examination = MedicalExaminationRepository::create(&self.db, examination).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Medical examination created",
            "examination_id" => examination.id,
            "employee_id" => examination.employee_id,
            "next_date" => examination.next_date
        );

        Ok(examination)
    }

    /// 検診実施の記録（完了日を設定し、次回日を周期から再計算）
    pub async fn complete_examination(
        &self,
        context: &AccessContext,
        id: Uuid,
        completed_on: NaiveDate,
    ) -> AppResult<medical_examination_model::Model> {
        let examination = self.get_examination(context, id).await?;

        let periodicity = match examination.harmful_factor_id {
            Some(factor_id) => HarmfulFactorRepository::find_by_id(&self.db, factor_id)
                .await?
                .map(|factor| factor.periodicity_months)
                .unwrap_or(12),
            None => 12,
        };

        let next_date =
            medical_examination_model::Model::compute_next_date(completed_on, periodicity)
                .ok_or_else(|| {
                    AppError::ValidationError("Invalid examination periodicity".to_string())
                })?;

        let mut active_model: medical_examination_model::ActiveModel = examination.into();
        active_model.date_completed = Set(Some(completed_on));
        active_model.next_date = Set(next_date);
        active_model.status = Set(ExaminationStatus::Completed.as_str().to_string());
        active_model.updated_at = Set(Utc::now());

        let examination =
            MedicalExaminationRepository::update_by_id(&self.db, id, active_model).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Medical examination completed",
            "examination_id" => id,
            "completed_on" => completed_on,
            "next_date" => examination.next_date
        );

        Ok(examination)
    }

    pub async fn delete_examination(&self, context: &AccessContext, id: Uuid) -> AppResult<()> {
        let examination = self.get_examination(context, id).await?;
        MedicalExaminationRepository::delete_by_id(&self.db, examination.id).await
    }

    /// 検診記録の可視性は従業員のスコープに従う
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
