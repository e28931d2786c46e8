// src/domain/medical_examination_type_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 検診種別（グローバルな参照データ、スコープ対象外）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "medical_examination_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub name: String,

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
