use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::modules::auth::application::services::validation;

#[derive(Debug, Clone)]
pub struct UpdateProfileInput {
    pub username: String,
    pub about_me: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileOutput {
    pub user_id: Uuid,
    pub username: String,
    pub about_me: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid bio: {0}")]
    InvalidAboutMe(String),

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] UserRepositoryError),
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<UpdateProfileOutput, UpdateProfileError>;
}

pub struct UpdateProfileUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProfileUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IUpdateProfileUseCase for UpdateProfileUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<UpdateProfileOutput, UpdateProfileError> {
        validation::validate_username(&input.username)
            .map_err(UpdateProfileError::InvalidUsername)?;

        if let Some(about_me) = &input.about_me {
            validation::validate_about_me(about_me).map_err(UpdateProfileError::InvalidAboutMe)?;
        }

        let current = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(UpdateProfileError::UserNotFound)?;

        // Uniqueness only matters when the username actually changes
        if input.username != current.username
            && self
                .query
                .find_by_username(&input.username)
                .await?
                .is_some()
        {
            return Err(UpdateProfileError::UsernameTaken);
        }

        let about_me = input
            .about_me
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let record = match self
            .repository
            .update_profile(user_id, input.username, about_me)
            .await
        {
            Ok(record) => record,
            // Unique-index race between the check and the write
            Err(UserRepositoryError::UserAlreadyExists) => {
                return Err(UpdateProfileError::UsernameTaken)
            }
            Err(e) => return Err(UpdateProfileError::RepositoryError(e)),
        };

        Ok(UpdateProfileOutput {
            user_id: record.id,
            username: record.username,
            about_me: record.about_me,
        })
    }
}
