use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::modules::follow::application::ports::outgoing::follow_repository::{
    FollowRepository, FollowRepositoryError,
};

#[derive(Debug, Clone)]
pub struct UnfollowUserOutput {
    pub username: String,
    /// False when there was no follow edge to remove.
    pub was_following: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UnfollowUserError {
    #[error("Users cannot unfollow themselves")]
    CannotUnfollowSelf,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] FollowRepositoryError),
}

#[async_trait]
pub trait IUnfollowUserUseCase: Send + Sync {
    async fn execute(
        &self,
        follower_id: Uuid,
        username: &str,
    ) -> Result<UnfollowUserOutput, UnfollowUserError>;
}

pub struct UnfollowUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: FollowRepository + Send + Sync,
{
    user_query: Q,
    repository: R,
}

impl<Q, R> UnfollowUserUseCase<Q, R>
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
impl<Q, R> IUnfollowUserUseCase for UnfollowUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: FollowRepository + Send + Sync,
{
    async fn execute(
        &self,
        follower_id: Uuid,
        username: &str,
    ) -> Result<UnfollowUserOutput, UnfollowUserError> {
        let target = self
            .user_query
            .find_by_username(username)
            .await?
            .ok_or_else(|| UnfollowUserError::UserNotFound(username.to_string()))?;

        if target.id == follower_id {
            return Err(UnfollowUserError::CannotUnfollowSelf);
        }

        let was_following = self
            .repository
            .delete(UserId::new(follower_id), UserId::new(target.id))
            .await?;

        Ok(UnfollowUserOutput {
            username: target.username,
            was_following,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::user_query::UserQueryResult;

    struct MockUserQuery {
        known_user: Option<UserQueryResult>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            Ok(self
                .known_user
                .clone()
                .filter(|u| u.username == username))
        }
    }

    struct MockFollowRepository {
        delete_result: bool,
    }

    #[async_trait]
    impl FollowRepository for MockFollowRepository {
        async fn insert(
            &self,
            _follower: UserId,
            _followed: UserId,
        ) -> Result<bool, FollowRepositoryError> {
            unimplemented!()
        }

        async fn delete(
            &self,
            _follower: UserId,
            _followed: UserId,
        ) -> Result<bool, FollowRepositoryError> {
            Ok(self.delete_result)
        }
    }

    fn query_result(id: Uuid, username: &str) -> UserQueryResult {
        let now = chrono::Utc::now();
        UserQueryResult {
            id,
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: "hash".to_string(),
            about_me: None,
            last_seen: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_unfollow_user_success() {
        let use_case = UnfollowUserUseCase::new(
            MockUserQuery {
                known_user: Some(query_result(Uuid::new_v4(), "susan")),
            },
            MockFollowRepository {
                delete_result: true,
            },
        );

        let result = use_case.execute(Uuid::new_v4(), "susan").await.unwrap();

        assert_eq!(result.username, "susan");
        assert!(result.was_following);
    }

    #[tokio::test]
    async fn test_unfollow_when_not_following() {
        let use_case = UnfollowUserUseCase::new(
            MockUserQuery {
                known_user: Some(query_result(Uuid::new_v4(), "susan")),
            },
            MockFollowRepository {
                delete_result: false,
            },
        );

        let result = use_case.execute(Uuid::new_v4(), "susan").await.unwrap();

        assert!(!result.was_following);
    }

    #[tokio::test]
    async fn test_unfollow_self_is_rejected() {
        let user_id = Uuid::new_v4();

        let use_case = UnfollowUserUseCase::new(
            MockUserQuery {
                known_user: Some(query_result(user_id, "susan")),
            },
            MockFollowRepository {
                delete_result: true,
            },
        );

        let result = use_case.execute(user_id, "susan").await;

        assert!(matches!(result, Err(UnfollowUserError::CannotUnfollowSelf)));
    }

    #[tokio::test]
    async fn test_unfollow_unknown_user() {
        let use_case = UnfollowUserUseCase::new(
            MockUserQuery { known_user: None },
            MockFollowRepository {
                delete_result: true,
            },
        );

        let result = use_case.execute(Uuid::new_v4(), "ghost").await;

        assert!(matches!(result, Err(UnfollowUserError::UserNotFound(_))));
    }
}
