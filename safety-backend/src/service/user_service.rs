// src/service/user_service.rs

use crate::domain::user_model::{self, SafeUser};
use crate::domain::access_profile_model;
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::user_repository::UserRepository;
use crate::utils::password::hash_password;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};
use uuid::Uuid;

pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// ユーザー作成
    ///
    /// アクセスプロファイルはユーザーと同時に（空の付与で）作成される。
    /// 以後の付与・剥奪は管理者の操作のみで行われる。
    pub async fn create_user(
        &self,
        username: String,
        email: Option<String>,
        password: &str,
        is_superuser: bool,
    ) -> AppResult<SafeUser> {
        if UserRepository::find_by_username(&self.db, &username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A user with this username already exists".to_string(),
            ));
        }

        let password_hash =
            hash_password(password).map_err(|e| AppError::InternalServerError(e.to_string()))?;

        let txn = self.db.begin().await?;

        let user = user_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            is_superuser: Set(is_superuser),
            is_active: Set(true),
            last_login_at: Set(None),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        access_profile_model::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.id),
            is_active: Set(true),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        log_with_context!(
            tracing::Level::INFO,
            "User created with empty access profile",
            "user_id" => user.id,
            "username" => &user.username,
            "is_superuser" => user.is_superuser
        );

        Ok(user.into())
    }

    pub async fn get_user(&self, user_id: Uuid) -> AppResult<SafeUser> {
        let user = UserRepository::find_by_id(&self.db, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(user.into())
    }

    pub async fn list_users(&self) -> AppResult<Vec<SafeUser>> {
        let users = UserRepository::find_all(&self.db).await?;
        Ok(users.into_iter().map(SafeUser::from).collect())
    }
}
