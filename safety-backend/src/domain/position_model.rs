// src/domain/position_model.rs

use crate::access::scope::{HierarchyScoped, ScopeFields, ScopeRef};
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 役職
///
/// organization は必須、subdivision / department は任意の帰属フィールド。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "positions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    pub organization_id: Uuid,

    #[sea_orm(nullable)]
    pub subdivision_id: Option<Uuid>,

    #[sea_orm(nullable)]
    pub department_id: Option<Uuid>,

    /// 電気安全グループ (I〜V)
    #[sea_orm(nullable)]
    pub electrical_safety_group: Option<String>,

    pub is_safety_responsible: bool,

    #[sea_orm(nullable)]
    pub safety_instructions: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization_model::Entity",
        from = "Column::OrganizationId",
        to = "super::organization_model::Column::Id"
    )]
    Organization,
    #[sea_orm(
        belongs_to = "super::subdivision_model::Entity",
        from = "Column::SubdivisionId",
        to = "super::subdivision_model::Column::Id"
    )]
    Subdivision,
    #[sea_orm(
        belongs_to = "super::department_model::Entity",
        from = "Column::DepartmentId",
        to = "super::department_model::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::employee_model::Entity")]
    Employees,
    #[sea_orm(has_many = "super::siz_norm_model::Entity")]
    SizNorms,
}

impl Related<super::organization_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::employee_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::siz_norm_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SizNorms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl HierarchyScoped for Model {
    const SCOPE_FIELDS: ScopeFields = ScopeFields::FULL;

    fn scope_ref(&self) -> ScopeRef {
        ScopeRef {
            organization: Some(self.organization_id),
            subdivision: self.subdivision_id,
            department: self.department_id,
        }
    }
}

pub const ELECTRICAL_SAFETY_GROUPS: [&str; 5] = ["I", "II", "III", "IV", "V"];
