use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Token storage error: {0}")]
    StorageError(String),
}

/// Revocation list for refresh tokens.
///
/// Entries are keyed by token hash and expire together with the token
/// itself, so the store stays bounded.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn revoke_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError>;

    async fn is_token_revoked(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;
}
