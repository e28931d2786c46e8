// src/domain/department_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 課（階層の最下位）
///
/// organization_id は非正規化フィールド。subdivision が設定されている場合、
/// その subdivision の organization と一致していなければならない
/// （書き込み時にサービス層で検証する）。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(nullable)]
    pub short_name: Option<String>,

    pub organization_id: Uuid,

    #[sea_orm(nullable)]
    pub subdivision_id: Option<Uuid>,

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
}

impl Related<super::organization_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::subdivision_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subdivision.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
