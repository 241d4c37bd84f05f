use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::token_hasher::hash_token;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};

#[derive(Debug, Clone)]
pub struct RefreshTokenOutput {
    pub access_token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Invalid or expired refresh token")]
    InvalidToken,

    #[error("Refresh token has been revoked")]
    TokenRevoked,

    #[error("Token generation failed: {0}")]
    TokenError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] TokenRepositoryError),
}

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<RefreshTokenOutput, RefreshTokenError>;
}

pub struct RefreshTokenUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> RefreshTokenUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    pub fn new(token_repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> IRefreshTokenUseCase for RefreshTokenUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<RefreshTokenOutput, RefreshTokenError> {
        let claims = self
            .token_provider
            .verify_token(refresh_token)
            .map_err(|_| RefreshTokenError::InvalidToken)?;

        if claims.token_type != "refresh" {
            return Err(RefreshTokenError::InvalidToken);
        }

        // Logout revokes by hash; honor that here
        if self
            .token_repository
            .is_token_revoked(&hash_token(refresh_token))
            .await?
        {
            return Err(RefreshTokenError::TokenRevoked);
        }

        let access_token = self
            .token_provider
            .generate_access_token(claims.sub)
            .map_err(|e| RefreshTokenError::TokenError(e.to_string()))?;

        Ok(RefreshTokenOutput { access_token })
    }
}
