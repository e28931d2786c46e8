// src/domain/employee_model.rs

use crate::access::scope::{HierarchyScoped, ScopeFields, ScopeRef};
use crate::domain::employee_status::EmployeeStatus;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 従業員
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub full_name: String,

    #[sea_orm(nullable)]
    pub date_of_birth: Option<NaiveDate>,

    #[sea_orm(nullable)]
    pub email: Option<String>,

    pub organization_id: Uuid,

    #[sea_orm(nullable)]
    pub subdivision_id: Option<Uuid>,

    #[sea_orm(nullable)]
    pub department_id: Option<Uuid>,

    pub position_id: Uuid,

    pub status: String,

    #[sea_orm(nullable)]
    pub hire_date: Option<NaiveDate>,

    // SIZ支給用のサイズ情報
    #[sea_orm(nullable)]
    pub height: Option<String>,

    #[sea_orm(nullable)]
    pub clothing_size: Option<String>,

    #[sea_orm(nullable)]
    pub shoe_size: Option<String>,

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
    #[sea_orm(
        belongs_to = "super::position_model::Entity",
        from = "Column::PositionId",
        to = "super::position_model::Column::Id"
    )]
    Position,
    #[sea_orm(has_many = "super::medical_examination_model::Entity")]
    MedicalExaminations,
    #[sea_orm(has_many = "super::siz_issue_model::Entity")]
    SizIssues,
}

impl Related<super::organization_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::position_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Position.def()
    }
}

impl Related<super::medical_examination_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MedicalExaminations.def()
    }
}

impl Related<super::siz_issue_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SizIssues.def()
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

impl Model {
    pub fn status(&self) -> Option<EmployeeStatus> {
        EmployeeStatus::from_str(&self.status)
    }
}
