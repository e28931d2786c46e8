// src/domain/organization_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 組織（階層の最上位）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub full_name: String,

    pub short_name: String,

    #[sea_orm(nullable)]
    pub requisites: Option<String>,

    #[sea_orm(nullable)]
    pub location: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subdivision_model::Entity")]
    Subdivisions,
    #[sea_orm(has_many = "super::department_model::Entity")]
    Departments,
    #[sea_orm(has_many = "super::employee_model::Entity")]
    Employees,
}

impl Related<super::subdivision_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subdivisions.def()
    }
}

impl Related<super::department_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Departments.def()
    }
}

impl Related<super::employee_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 表示名（短縮名があればそれを優先）
    pub fn display_name(&self) -> &str {
        if self.short_name.is_empty() {
            &self.full_name
        } else {
            &self.short_name
        }
    }
}
