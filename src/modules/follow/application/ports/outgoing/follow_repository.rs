use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side of the follower graph.
///
/// Both operations are idempotent: the boolean tells the caller whether
/// the graph actually changed.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Returns `false` when the follow edge already existed.
    async fn insert(
        &self,
        follower: UserId,
        followed: UserId,
    ) -> Result<bool, FollowRepositoryError>;

    /// Returns `false` when there was no edge to remove.
    async fn delete(
        &self,
        follower: UserId,
        followed: UserId,
    ) -> Result<bool, FollowRepositoryError>;
}
