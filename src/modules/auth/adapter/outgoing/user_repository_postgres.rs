use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRecord, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_record(model: UserModel) -> UserRecord {
        UserRecord {
            id: model.id,
            username: model.username,
            email: model.email,
            about_me: model.about_me,
        }
    }

    fn map_insert_err(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    async fn find_required(&self, user_id: Uuid) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserRecord, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            about_me: Set(user.about_me),
            last_seen: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_err)?;

        Ok(Self::map_to_record(inserted))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        username: String,
        about_me: Option<String>,
    ) -> Result<UserRecord, UserRepositoryError> {
        let user = self.find_required(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.username = Set(username);
        active_user.about_me = Set(about_me);

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_insert_err)?;

        Ok(Self::map_to_record(updated))
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let user = self.find_required(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.password_hash = Set(new_password_hash);

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn touch_last_seen(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let user = self.find_required(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.last_seen = Set(Some(chrono::Utc::now().into()));

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let user = self.find_required(user_id).await?;

        // Posts and follow rows cascade at the schema level
        user.delete(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
