// src/domain/access_profile_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// ユーザーごとのアクセスプロファイル（Scope-Based Access Control）
///
/// 3レベルの付与が独立に存在する:
/// - 組織への付与 → その組織の全部門・全課へのアクセス
/// - 部門への付与 → その部門の全課へのアクセス
/// - 課への付与 → その課のみへのアクセス
///
/// プロファイルはユーザー作成時に必ず作成され、管理者の付与・剥奪のみで
/// 変化する。自動導出はしない。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "access_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub user_id: Uuid,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_model::Entity",
        from = "Column::UserId",
        to = "super::user_model::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::access_grant_model::organization_grant::Entity")]
    OrganizationGrants,
    #[sea_orm(has_many = "super::access_grant_model::subdivision_grant::Entity")]
    SubdivisionGrants,
    #[sea_orm(has_many = "super::access_grant_model::department_grant::Entity")]
    DepartmentGrants,
}

impl Related<super::user_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
