use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the follower graph (profile counters and the
/// follows-this-user flag on profile pages).
#[async_trait]
pub trait FollowQuery: Send + Sync {
    async fn followers_count(&self, user: UserId) -> Result<u64, FollowQueryError>;
    async fn following_count(&self, user: UserId) -> Result<u64, FollowQueryError>;
    async fn is_following(
        &self,
        follower: UserId,
        followed: UserId,
    ) -> Result<bool, FollowQueryError>;
}
