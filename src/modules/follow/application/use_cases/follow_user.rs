use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::modules::follow::application::ports::outgoing::follow_repository::{
    FollowRepository, FollowRepositoryError,
};

#[derive(Debug, Clone)]
pub struct FollowUserOutput {
    pub username: String,
    /// False when the edge already existed (idempotent follow).
    pub newly_followed: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowUserError {
    #[error("Users cannot follow themselves")]
    CannotFollowSelf,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] FollowRepositoryError),
}

#[async_trait]
pub trait IFollowUserUseCase: Send + Sync {
    async fn execute(
        &self,
        follower_id: Uuid,
        username: &str,
    ) -> Result<FollowUserOutput, FollowUserError>;
}

pub struct FollowUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: FollowRepository + Send + Sync,
{
    user_query: Q,
    repository: R,
}

impl<Q, R> FollowUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: FollowRepository + Send + Sync,
{
    pub fn new(user_query: Q, repository: R) -> Self {
        Self {
            user_query,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> IFollowUserUseCase for FollowUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: FollowRepository + Send + Sync,
{
    async fn execute(
        &self,
        follower_id: Uuid,
        username: &str,
    ) -> Result<FollowUserOutput, FollowUserError> {
        let target = self
            .user_query
            .find_by_username(username)
            .await?
            .ok_or_else(|| FollowUserError::UserNotFound(username.to_string()))?;

        // Self-follow is rejected before touching the graph
        if target.id == follower_id {
            return Err(FollowUserError::CannotFollowSelf);
        }

        let newly_followed = self
            .repository
            .insert(UserId::new(follower_id), UserId::new(target.id))
            .await?;

        Ok(FollowUserOutput {
            username: target.username,
            newly_followed,
        })
    }
}
