use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::post::application::domain::entities::{Post, MAX_POST_CHARS};
use crate::modules::post::application::ports::outgoing::post_repository::{
    CreatePostData, PostRepository, PostRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Invalid post body: {0}")]
    InvalidBody(String),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] PostRepositoryError),
}

#[async_trait]
pub trait ICreatePostUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, body: String) -> Result<Post, CreatePostError>;
}

pub struct CreatePostUseCase<R>
where
    R: PostRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreatePostUseCase for CreatePostUseCase<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, body: String) -> Result<Post, CreatePostError> {
        let body = body.trim().to_string();

        if body.is_empty() {
            return Err(CreatePostError::InvalidBody(
                "A post cannot be empty".to_string(),
            ));
        }

        // Counted in characters, not bytes
        if body.chars().count() > MAX_POST_CHARS {
            return Err(CreatePostError::InvalidBody(format!(
                "A post must be at most {} characters",
                MAX_POST_CHARS
            )));
        }

        let post = self
            .repository
            .create_post(CreatePostData { user_id, body })
            .await?;

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPostRepository {
        should_fail: bool,
    }

    #[async_trait]
    impl PostRepository for MockPostRepository {
        async fn create_post(&self, post: CreatePostData) -> Result<Post, PostRepositoryError> {
            if self.should_fail {
                return Err(PostRepositoryError::DatabaseError(
                    "insert failed".to_string(),
                ));
            }
            Ok(Post {
                id: Uuid::new_v4(),
                user_id: post.user_id,
                body: post.body,
                created_at: chrono::Utc::now(),
            })
        }
    }

    fn use_case() -> CreatePostUseCase<MockPostRepository> {
        CreatePostUseCase::new(MockPostRepository { should_fail: false })
    }

    #[tokio::test]
    async fn test_create_post_success() {
        let user_id = Uuid::new_v4();

        let post = use_case()
            .execute(user_id, "  hello world  ".to_string())
            .await
            .unwrap();

        assert_eq!(post.user_id, user_id);
        assert_eq!(post.body, "hello world", "body should be trimmed");
    }

    #[tokio::test]
    async fn test_create_post_at_exact_limit() {
        let body = "x".repeat(MAX_POST_CHARS);

        let post = use_case().execute(Uuid::new_v4(), body.clone()).await.unwrap();

        assert_eq!(post.body, body);
    }

    #[tokio::test]
    async fn test_create_post_too_long_is_rejected() {
        let body = "x".repeat(MAX_POST_CHARS + 1);

        let result = use_case().execute(Uuid::new_v4(), body).await;

        assert!(matches!(result, Err(CreatePostError::InvalidBody(_))));
    }

    #[tokio::test]
    async fn test_create_post_multibyte_characters_counted_once() {
        // 140 snowmen are 140 characters even though they are 420 bytes
        let body = "\u{2603}".repeat(MAX_POST_CHARS);

        let result = use_case().execute(Uuid::new_v4(), body).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_post_empty_after_trim_is_rejected() {
        let result = use_case().execute(Uuid::new_v4(), "   \n  ".to_string()).await;

        assert!(matches!(result, Err(CreatePostError::InvalidBody(_))));
    }

    #[tokio::test]
    async fn test_create_post_repository_error() {
        let use_case = CreatePostUseCase::new(MockPostRepository { should_fail: true });

        let result = use_case.execute(Uuid::new_v4(), "hello".to_string()).await;

        assert!(matches!(result, Err(CreatePostError::RepositoryError(_))));
    }
}
