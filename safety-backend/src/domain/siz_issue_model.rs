// src/domain/siz_issue_model.rs

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 従業員へのSIZ支給記録
///
/// 帰属フィールドは持たず、可視性は従業員のスコープに従う。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "siz_issues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub employee_id: Uuid,

    pub siz_item_id: Uuid,

    pub issue_date: NaiveDate,

    pub quantity: i32,

    /// 支給時点の摩耗率 (%)
    pub wear_percent: i32,

    #[sea_orm(nullable)]
    pub return_date: Option<NaiveDate>,

    pub is_returned: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::EmployeeId",
        to = "super::employee_model::Column::Id"
    )]
    Employee,
    #[sea_orm(
        belongs_to = "super::siz_item_model::Entity",
        from = "Column::SizItemId",
        to = "super::siz_item_model::Column::Id"
    )]
    SizItem,
}

impl Related<super::employee_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::siz_item_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SizItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 現在支給中か（未返却）
    pub fn is_outstanding(&self) -> bool {
        !self.is_returned
    }
}
