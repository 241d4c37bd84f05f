use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::post::application::domain::entities::Post;
use crate::modules::post::application::ports::outgoing::post_repository::{
    CreatePostData, PostRepository, PostRepositoryError,
};

use super::sea_orm_entity::posts::{ActiveModel as PostActiveModel, Model as PostModel};

#[derive(Clone)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_post(model: PostModel) -> Post {
        Post {
            id: model.id,
            user_id: model.user_id,
            body: model.body,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create_post(&self, post: CreatePostData) -> Result<Post, PostRepositoryError> {
        let active_post = PostActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(post.user_id),
            body: Set(post.body),
            created_at: Set(chrono::Utc::now().into()),
        };

        let inserted = active_post
            .insert(&*self.db)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_post(inserted))
    }
}
