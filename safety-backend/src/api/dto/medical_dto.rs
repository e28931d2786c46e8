// src/api/dto/medical_dto.rs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateExaminationTypeRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateHarmfulFactorRequest {
    #[validate(length(min = 1, max = 100, message = "Short name must be 1-100 characters"))]
    pub short_name: String,
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: String,
    pub periodicity_months: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateExaminationRequest {
    pub employee_id: Uuid,
    pub examination_type_id: Uuid,
    pub harmful_factor_id: Option<Uuid>,
    pub date_completed: Option<NaiveDate>,
    pub next_date: Option<NaiveDate>,
}

/// 検診実施の記録リクエスト
#[derive(Debug, Deserialize)]
pub struct CompleteExaminationRequest {
    pub completed_on: NaiveDate,
}

#[derive(Debug, Deserialize, Default)]
pub struct ExaminationListQuery {
    pub employee_id: Option<Uuid>,
    pub status: Option<String>,
}
