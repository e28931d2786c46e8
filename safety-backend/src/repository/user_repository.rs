use crate::domain::user_model::{self, Entity as User};
use crate::error::AppError;
use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub async fn create(
        db: &DatabaseConnection,
        user: user_model::ActiveModel,
    ) -> Result<user_model::Model, AppError> {
        let result = user.insert(db).await?;
        Ok(result)
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<user_model::Model>, AppError> {
        let result = User::find_by_id(id).one(db).await?;
        Ok(result)
    }

    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<user_model::Model>, AppError> {
        let result = User::find()
            .filter(user_model::Column::Username.eq(username))
            .one(db)
            .await?;
        Ok(result)
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<user_model::Model>, AppError> {
        let result = User::find()
            .order_by_asc(user_model::Column::Username)
            .all(db)
            .await?;
        Ok(result)
    }

    pub async fn update_last_login(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        let user = Self::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut active_model: user_model::ActiveModel = user.into();
        active_model.last_login_at = Set(Some(chrono::Utc::now()));
        active_model.updated_at = Set(chrono::Utc::now());
        active_model.update(db).await?;

        Ok(())
    }
}
