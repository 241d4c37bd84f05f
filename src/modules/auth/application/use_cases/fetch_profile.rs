use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::modules::follow::application::ports::outgoing::follow_query::{
    FollowQuery, FollowQueryError,
};
use crate::modules::post::application::ports::outgoing::post_query::{PostQuery, PostQueryError};

/// Everything the profile page shows: the user plus their counters.
#[derive(Debug, Clone)]
pub struct ProfileOutput {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub about_me: Option<String>,
    pub last_seen: Option<DateTime<Utc>>,
    pub posts_count: u64,
    pub followers_count: u64,
    pub following_count: u64,
    /// Whether the viewing user follows this profile.
    pub is_following: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Query error: {0}")]
    UserQueryError(#[from] UserQueryError),

    #[error("Query error: {0}")]
    FollowQueryError(#[from] FollowQueryError),

    #[error("Query error: {0}")]
    PostQueryError(#[from] PostQueryError),
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        username: &str,
        viewer_id: Uuid,
    ) -> Result<ProfileOutput, FetchProfileError>;
}

pub struct FetchProfileUseCase<U, F, P>
where
    U: UserQuery + Send + Sync,
    F: FollowQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    user_query: U,
    follow_query: F,
    post_query: P,
}

impl<U, F, P> FetchProfileUseCase<U, F, P>
where
    U: UserQuery + Send + Sync,
    F: FollowQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    pub fn new(user_query: U, follow_query: F, post_query: P) -> Self {
        Self {
            user_query,
            follow_query,
            post_query,
        }
    }
}

#[async_trait]
impl<U, F, P> IFetchProfileUseCase for FetchProfileUseCase<U, F, P>
where
    U: UserQuery + Send + Sync,
    F: FollowQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        username: &str,
        viewer_id: Uuid,
    ) -> Result<ProfileOutput, FetchProfileError> {
        let user = self
            .user_query
            .find_by_username(username)
            .await?
            .ok_or_else(|| FetchProfileError::UserNotFound(username.to_string()))?;

        let subject = UserId::new(user.id);

        let posts_count = self.post_query.count_by_user(subject).await?;
        let followers_count = self.follow_query.followers_count(subject).await?;
        let following_count = self.follow_query.following_count(subject).await?;

        let is_following = if viewer_id == user.id {
            false
        } else {
            self.follow_query
                .is_following(UserId::new(viewer_id), subject)
                .await?
        };

        Ok(ProfileOutput {
            user_id: user.id,
            username: user.username,
            email: user.email,
            about_me: user.about_me,
            last_seen: user.last_seen,
            posts_count,
            followers_count,
            following_count,
            is_following,
        })
    }
}
