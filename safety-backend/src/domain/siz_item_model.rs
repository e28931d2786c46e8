// src/domain/siz_item_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 着用区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WearType {
    Constant,
    Seasonal,
    OnDuty,
}

impl WearType {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "constant" => Some(Self::Constant),
            "seasonal" => Some(Self::Seasonal),
            "on_duty" => Some(Self::OnDuty),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Seasonal => "seasonal",
            Self::OnDuty => "on_duty",
        }
    }
}

impl fmt::Display for WearType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 個人保護具（SIZ）カタログ
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "siz_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    pub classification: String,

    pub unit: String,

    /// 着用期間（月数）。0 は「摩耗まで」
    pub wear_period_months: i32,

    pub wear_type: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::siz_norm_model::Entity")]
    SizNorms,
    #[sea_orm(has_many = "super::siz_issue_model::Entity")]
    SizIssues,
}

impl Related<super::siz_norm_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SizNorms.def()
    }
}

impl Related<super::siz_issue_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SizIssues.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 摩耗まで着用する保護具か
    pub fn is_until_worn_out(&self) -> bool {
        self.wear_period_months == 0
    }
}
