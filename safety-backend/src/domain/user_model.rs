// src/domain/user_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub username: String,

    #[sea_orm(nullable)]
    pub email: Option<String>,

    #[serde(skip_serializing)] // パスワードハッシュは絶対にシリアライズしない
    pub password_hash: String,

    pub is_superuser: bool,

    pub is_active: bool,

    pub last_login_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::access_profile_model::Entity")]
    AccessProfile,
}

impl Related<super::access_profile_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// JWTに埋め込むユーザー情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub user_id: Uuid,
    pub username: String,
    pub is_superuser: bool,
    pub is_active: bool,
}

impl UserClaims {
    /// 認証可能かチェック
    pub fn can_authenticate(&self) -> bool {
        self.is_active
    }
}

/// パスワードハッシュを含まないユーザー表現（APIレスポンス用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeUser {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub is_superuser: bool,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Model> for SafeUser {
    fn from(user: Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_superuser: user.is_superuser,
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

impl Model {
    pub fn to_claims(&self) -> UserClaims {
        UserClaims {
            user_id: self.id,
            username: self.username.clone(),
            is_superuser: self.is_superuser,
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_reflect_superuser_flag() {
        let user = Model {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            email: None,
            password_hash: "hash".to_string(),
            is_superuser: true,
            is_active: true,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let claims = user.to_claims();
        assert!(claims.is_superuser);
        assert!(claims.can_authenticate());
    }
}
