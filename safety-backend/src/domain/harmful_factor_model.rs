// src/domain/harmful_factor_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 有害要因（検診周期の根拠となる参照データ）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "harmful_factors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub short_name: String,

    pub full_name: String,

    /// 検診周期（月数）
    pub periodicity_months: i32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::medical_examination_model::Entity")]
    MedicalExaminations,
}

impl Related<super::medical_examination_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MedicalExaminations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
