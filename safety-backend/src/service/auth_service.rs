// src/service/auth_service.rs

use crate::domain::user_model::SafeUser;
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::repository::user_repository::UserRepository;
use crate::utils::jwt::JwtManager;
use crate::utils::password::verify_password;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub struct AuthService {
    db: DatabaseConnection,
    jwt_manager: Arc<JwtManager>,
}

/// サインイン結果
pub struct SigninResult {
    pub access_token: String,
    pub user: SafeUser,
}

impl AuthService {
    pub fn new(db: DatabaseConnection, jwt_manager: Arc<JwtManager>) -> Self {
        Self { db, jwt_manager }
    }

    /// ユーザー名とパスワードでサインインし、アクセストークンを発行
    pub async fn signin(&self, username: &str, password: &str) -> AppResult<SigninResult> {
        let user = UserRepository::find_by_username(&self.db, username).await?;

        // ユーザーの存在を漏らさないため、認証失敗は常に同じエラー
        let Some(user) = user else {
            log_with_context!(
                tracing::Level::WARN,
                "Signin attempt with unknown username",
                "username" => username
            );
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        };

        let password_matches = verify_password(password, &user.password_hash)
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;

        if !password_matches {
            log_with_context!(
                tracing::Level::WARN,
                "Signin attempt with wrong password",
                "user_id" => user.id
            );
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        if !user.is_active {
            return Err(AppError::Forbidden("Account is inactive".to_string()));
        }

        let access_token = self
            .jwt_manager
            .generate_access_token(user.to_claims())
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;

        UserRepository::update_last_login(&self.db, user.id).await?;

        log_with_context!(
            tracing::Level::INFO,
            "User signed in",
            "user_id" => user.id,
            "username" => &user.username
        );

        Ok(SigninResult {
            access_token,
            user: user.into(),
        })
    }

    /// 現在のユーザー情報を取得
    pub async fn current_user(&self, user_id: uuid::Uuid) -> AppResult<SafeUser> {
        let user = UserRepository::find_by_id(&self.db, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(user.into())
    }
}
