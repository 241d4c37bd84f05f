use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::follow::application::ports::outgoing::follow_query::{
    FollowQuery, FollowQueryError,
};

use super::sea_orm_entity::follows::{Column, Entity};

#[derive(Clone)]
pub struct FollowQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FollowQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FollowQuery for FollowQueryPostgres {
    async fn followers_count(&self, user: UserId) -> Result<u64, FollowQueryError> {
        let user_uuid: Uuid = user.into();

        Entity::find()
            .filter(Column::FollowedId.eq(user_uuid))
            .count(&*self.db)
            .await
            .map_err(|e| FollowQueryError::DatabaseError(e.to_string()))
    }

    async fn following_count(&self, user: UserId) -> Result<u64, FollowQueryError> {
        let user_uuid: Uuid = user.into();

        Entity::find()
            .filter(Column::FollowerId.eq(user_uuid))
            .count(&*self.db)
            .await
            .map_err(|e| FollowQueryError::DatabaseError(e.to_string()))
    }

    async fn is_following(
        &self,
        follower: UserId,
        followed: UserId,
    ) -> Result<bool, FollowQueryError> {
        let edge = Entity::find_by_id((follower.value(), followed.value()))
            .one(&*self.db)
            .await
            .map_err(|e| FollowQueryError::DatabaseError(e.to_string()))?;

        Ok(edge.is_some())
    }
}
