use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::user_repository::CreateUserData;
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::modules::auth::application::services::validation;

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub about_me: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegisterUserOutput {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub about_me: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Invalid bio: {0}")]
    InvalidAboutMe(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] UserRepositoryError),
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError>;
}

pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    fn validate(input: &RegisterUserInput) -> Result<(), RegisterUserError> {
        validation::validate_username(&input.username)
            .map_err(RegisterUserError::InvalidUsername)?;
        validation::validate_email(&input.email).map_err(RegisterUserError::InvalidEmail)?;
        validation::validate_password(&input.password)
            .map_err(RegisterUserError::InvalidPassword)?;

        if input.password != input.password_confirm {
            return Err(RegisterUserError::PasswordMismatch);
        }

        if let Some(about_me) = &input.about_me {
            validation::validate_about_me(about_me).map_err(RegisterUserError::InvalidAboutMe)?;
        }

        Ok(())
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        Self::validate(&input)?;

        // Same uniqueness probes the registration form runs, one lookup each
        if self.query.find_by_username(&input.username).await?.is_some() {
            return Err(RegisterUserError::UsernameTaken);
        }

        if self.query.find_by_email(&input.email).await?.is_some() {
            return Err(RegisterUserError::EmailTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let about_me = input
            .about_me
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let record = self
            .repository
            .create_user(CreateUserData {
                username: input.username,
                email: input.email,
                password_hash,
                about_me,
            })
            .await?;

        Ok(RegisterUserOutput {
            user_id: record.id,
            username: record.username,
            email: record.email,
            about_me: record.about_me,
        })
    }
}
