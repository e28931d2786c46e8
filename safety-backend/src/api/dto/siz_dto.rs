// src/api/dto/siz_dto.rs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSizItemRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "Classification must be 1-255 characters"))]
    pub classification: String,
    #[validate(length(min = 1, max = 50, message = "Unit must be 1-50 characters"))]
    pub unit: String,
    pub wear_period_months: i32,
    pub wear_type: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateSizNormRequest {
    pub position_id: Uuid,
    pub siz_item_id: Uuid,
    pub quantity: i32,
    pub condition: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSizIssueRequest {
    pub employee_id: Uuid,
    pub siz_item_id: Uuid,
    pub issue_date: NaiveDate,
    pub quantity: i32,
    #[serde(default)]
    pub wear_percent: i32,
}

/// 保護具の返却リクエスト
#[derive(Debug, Deserialize)]
pub struct ReturnSizIssueRequest {
    pub return_date: NaiveDate,
}

#[derive(Debug, Deserialize, Default)]
pub struct SizNormListQuery {
    pub position_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SizIssueListQuery {
    pub employee_id: Option<Uuid>,
    #[serde(default)]
    pub outstanding_only: bool,
}
