use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::modules::auth::application::services::validation;

#[derive(Debug, Clone)]
pub struct ResetPasswordInput {
    pub token: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordError {
    /// Expired, malformed and wrong-type tokens all collapse into this;
    /// the caller is never told which.
    #[error("Invalid or expired reset token")]
    InvalidToken,

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),
}

#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, input: ResetPasswordInput) -> Result<(), ResetPasswordError>;
}

pub struct ResetPasswordUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> ResetPasswordUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> IResetPasswordUseCase for ResetPasswordUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: ResetPasswordInput) -> Result<(), ResetPasswordError> {
        let user_id = self
            .token_provider
            .verify_reset_token(&input.token)
            .map_err(|_| ResetPasswordError::InvalidToken)?;

        validation::validate_password(&input.password)
            .map_err(ResetPasswordError::InvalidPassword)?;

        if input.password != input.password_confirm {
            return Err(ResetPasswordError::PasswordMismatch);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| ResetPasswordError::HashingFailed(e.to_string()))?;

        match self.repository.update_password(user_id, password_hash).await {
            Ok(()) => Ok(()),
            // Token outlived the account; same story as a bad token
            Err(UserRepositoryError::UserNotFound) => Err(ResetPasswordError::InvalidToken),
            Err(e) => Err(ResetPasswordError::RepositoryError(e)),
        }
    }
}
