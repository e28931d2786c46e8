use crate::domain::harmful_factor_model::{self, Entity as HarmfulFactor};
use crate::domain::medical_examination_model::{self, Entity as MedicalExamination};
use crate::domain::medical_examination_type_model::{self, Entity as MedicalExaminationType};
use crate::domain::employee_model;
use crate::error::AppError;
use chrono::NaiveDate;
use sea_orm::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

pub struct MedicalExaminationRepository;

impl MedicalExaminationRepository {
    pub async fn create(
        db: &DatabaseConnection,
        examination: medical_examination_model::ActiveModel,
    ) -> Result<medical_examination_model::Model, AppError> {
        let result = examination.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<medical_examination_model::Model>, AppError> {
        let result = MedicalExamination::find_by_id(id).one(db).await?;
        Ok(result)
    }

    /// 従業員スコープ条件付きの一覧
    ///
    /// 検診記録は帰属フィールドを持たないため、従業員テーブルへJOINし、
    /// スコープ条件は従業員のカラムに対して適用する。
    pub async fn find_scoped(
        db: &DatabaseConnection,
        employee_scope_condition: Condition,
        employee_id: Option<Uuid>,
        status: Option<&str>,
        page: i32,
        per_page: i32,
    ) -> Result<(Vec<medical_examination_model::Model>, u64), AppError> {
        let mut condition = Condition::all().add(employee_scope_condition);

        if let Some(employee_id) = employee_id {
            condition =
                condition.add(medical_examination_model::Column::EmployeeId.eq(employee_id));
        }

        if let Some(status) = status {
            condition = condition.add(medical_examination_model::Column::Status.eq(status));
        }

        let query = MedicalExamination::find()
            .join(
                JoinType::InnerJoin,
                medical_examination_model::Relation::Employee.def(),
            )
            .filter(condition)
            .order_by_asc(medical_examination_model::Column::NextDate);

        let paginator = query.paginate(db, per_page as u64);
        let total_count = paginator.num_items().await?;
        let examinations = paginator.fetch_page((page - 1) as u64).await?;

        Ok((examinations, total_count))
    }

    /// 次回検診日が指定日以前の記録と対象従業員（期限ダッシュボード用）
    pub async fn find_due_before_with_employees(
        db: &DatabaseConnection,
        before: NaiveDate,
    ) -> Result<Vec<(medical_examination_model::Model, Option<employee_model::Model>)>, AppError>
    {
        let result = MedicalExamination::find()
            .find_also_related(employee_model::Entity)
            .filter(medical_examination_model::Column::DateCompleted.is_null())
            .filter(medical_examination_model::Column::NextDate.lte(before))
            .order_by_asc(medical_examination_model::Column::NextDate)
            .all(db)
            .await?;
        Ok(result)
    }

    pub async fn update_by_id(
        db: &DatabaseConnection,
        id: Uuid,
        examination: medical_examination_model::ActiveModel,
    ) -> Result<medical_examination_model::Model, AppError> {
        let mut active_model = examination;
        active_model.id = sea_orm::Set(id);
        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        MedicalExamination::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}

pub struct MedicalExaminationTypeRepository;

impl MedicalExaminationTypeRepository {
    pub async fn create(
        db: &DatabaseConnection,
        examination_type: medical_examination_type_model::ActiveModel,
    ) -> Result<medical_examination_type_model::Model, AppError> {
        let result = examination_type.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<medical_examination_type_model::Model>, AppError> {
        let result = MedicalExaminationType::find_by_id(id).one(db).await?;
        Ok(result)
    }

    pub async fn find_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<Option<medical_examination_type_model::Model>, AppError> {
        let result = MedicalExaminationType::find()
            .filter(medical_examination_type_model::Column::Name.eq(name))
            .one(db)
            .await?;
        Ok(result)
    }

    pub async fn find_all(
        db: &DatabaseConnection,
    ) -> Result<Vec<medical_examination_type_model::Model>, AppError> {
        let result = MedicalExaminationType::find()
            .order_by_asc(medical_examination_type_model::Column::Name)
            .all(db)
            .await?;
        Ok(result)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        MedicalExaminationType::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    pub async fn is_referenced(db: &DatabaseConnection, id: Uuid) -> Result<bool, AppError> {
        let examinations = MedicalExamination::find()
            .filter(medical_examination_model::Column::ExaminationTypeId.eq(id))
            .count(db)
            .await?;
        Ok(examinations > 0)
    }
}

pub struct HarmfulFactorRepository;

impl HarmfulFactorRepository {
    pub async fn create(
        db: &DatabaseConnection,
        factor: harmful_factor_model::ActiveModel,
    ) -> Result<harmful_factor_model::Model, AppError> {
        let result = factor.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<harmful_factor_model::Model>, AppError> {
        let result = HarmfulFactor::find_by_id(id).one(db).await?;
        Ok(result)
    }

    pub async fn find_by_short_name(
        db: &DatabaseConnection,
        short_name: &str,
    ) -> Result<Option<harmful_factor_model::Model>, AppError> {
        let result = HarmfulFactor::find()
            .filter(harmful_factor_model::Column::ShortName.eq(short_name))
            .one(db)
            .await?;
        Ok(result)
    }

    pub async fn find_all(
        db: &DatabaseConnection,
    ) -> Result<Vec<harmful_factor_model::Model>, AppError> {
        let result = HarmfulFactor::find()
            .order_by_asc(harmful_factor_model::Column::ShortName)
            .all(db)
            .await?;
        Ok(result)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        HarmfulFactor::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    pub async fn is_referenced(db: &DatabaseConnection, id: Uuid) -> Result<bool, AppError> {
        let examinations = MedicalExamination::find()
            .filter(medical_examination_model::Column::HarmfulFactorId.eq(id))
            .count(db)
            .await?;
        Ok(examinations > 0)
    }
}
