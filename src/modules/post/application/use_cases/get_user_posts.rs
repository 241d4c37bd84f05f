use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::modules::post::application::ports::outgoing::post_query::{
    PageRequest, PageResult, PostQuery, PostQueryError, PostView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserPostsError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Query error: {0}")]
    UserQueryError(#[from] UserQueryError),

    #[error("Query error: {0}")]
    PostQueryError(#[from] PostQueryError),
}

#[async_trait]
pub trait IGetUserPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        username: &str,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<PageResult<PostView>, GetUserPostsError>;
}

pub struct GetUserPostsUseCase<U, Q>
where
    U: UserQuery + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    user_query: U,
    post_query: Q,
    default_per_page: u32,
}

impl<U, Q> GetUserPostsUseCase<U, Q>
where
    U: UserQuery + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    pub fn new(user_query: U, post_query: Q, default_per_page: u32) -> Self {
        Self {
            user_query,
            post_query,
            default_per_page,
        }
    }
}

#[async_trait]
impl<U, Q> IGetUserPostsUseCase for GetUserPostsUseCase<U, Q>
where
    U: UserQuery + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        username: &str,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<PageResult<PostView>, GetUserPostsError> {
        let user = self
            .user_query
            .find_by_username(username)
            .await?
            .ok_or_else(|| GetUserPostsError::UserNotFound(username.to_string()))?;

        let page = PageRequest::resolve(page, per_page, self.default_per_page);

        let result = self.post_query.by_user(UserId::new(user.id), page).await?;

        Ok(result)
    }
}
