// src/domain/siz_norm_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 役職ごとのSIZ支給基準
///
/// 帰属フィールドは持たず、可視性は役職のスコープに従う。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "siz_norms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub position_id: Uuid,

    pub siz_item_id: Uuid,

    pub quantity: i32,

    /// 支給条件（「冬季のみ」など、空なら無条件）
    #[sea_orm(nullable)]
    pub condition: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::position_model::Entity",
        from = "Column::PositionId",
        to = "super::position_model::Column::Id"
    )]
    Position,
    #[sea_orm(
        belongs_to = "super::siz_item_model::Entity",
        from = "Column::SizItemId",
        to = "super::siz_item_model::Column::Id"
    )]
    SizItem,
}

impl Related<super::position_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Position.def()
    }
}

impl Related<super::siz_item_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SizItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
