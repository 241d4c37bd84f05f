use async_trait::async_trait;

use crate::modules::post::application::domain::entities::Post;

/// Write-side data for a new post.
#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub user_id: uuid::Uuid,
    pub body: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, post: CreatePostData) -> Result<Post, PostRepositoryError>;
}
