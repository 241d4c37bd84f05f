use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::follow::application::ports::outgoing::follow_repository::{
    FollowRepository, FollowRepositoryError,
};

use super::sea_orm_entity::follows::{ActiveModel, Column, Entity};

#[derive(Clone)]
pub struct FollowRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FollowRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FollowRepository for FollowRepositoryPostgres {
    async fn insert(
        &self,
        follower: UserId,
        followed: UserId,
    ) -> Result<bool, FollowRepositoryError> {
        let active = ActiveModel {
            follower_id: Set(follower.value()),
            followed_id: Set(followed.value()),
            created_at: Set(chrono::Utc::now().into()),
        };

        // The composite primary key is the duplicate-follow guard; a
        // conflicting insert is a no-op, not an error.
        let result = Entity::insert(active)
            .on_conflict(
                OnConflict::columns([Column::FollowerId, Column::FollowedId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&*self.db)
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => {
                let err_str = e.to_string().to_lowercase();
                if err_str.contains("duplicate key") || err_str.contains("23505") {
                    return Ok(false);
                }
                Err(FollowRepositoryError::DatabaseError(e.to_string()))
            }
        }
    }

    async fn delete(
        &self,
        follower: UserId,
        followed: UserId,
    ) -> Result<bool, FollowRepositoryError> {
        let follower_uuid: Uuid = follower.into();
        let followed_uuid: Uuid = followed.into();

        let result = Entity::delete_many()
            .filter(Column::FollowerId.eq(follower_uuid))
            .filter(Column::FollowedId.eq(followed_uuid))
            .exec(&*self.db)
            .await
            .map_err(|e| FollowRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
