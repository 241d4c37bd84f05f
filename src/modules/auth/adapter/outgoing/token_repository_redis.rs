use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};

const KEY_PREFIX: &str = "revoked_token:";

/// Redis-backed refresh-token revocation list.
///
/// Each entry lives exactly as long as the token it shadows, so logout
/// state cleans itself up.
#[derive(Clone)]
pub struct RedisTokenRepository {
    pool: Arc<deadpool_redis::Pool>,
}

impl RedisTokenRepository {
    pub fn new(pool: Arc<deadpool_redis::Pool>) -> Self {
        Self { pool }
    }

    fn key_for(token_hash: &str) -> String {
        format!("{}{}", KEY_PREFIX, token_hash)
    }

    /// Seconds until `expires_at`, with a floor of one second so a token
    /// expiring right now still lands in the store.
    fn ttl_seconds(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
        (expires_at - now).num_seconds().max(1) as u64
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    async fn revoke_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::StorageError(e.to_string()))?;

        let ttl = Self::ttl_seconds(expires_at, Utc::now());

        let _: () = conn
            .set_ex(Self::key_for(&token_hash), user_id.to_string(), ttl)
            .await
            .map_err(|e| TokenRepositoryError::StorageError(e.to_string()))?;

        Ok(())
    }

    async fn is_token_revoked(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::StorageError(e.to_string()))?;

        let exists: bool = conn
            .exists(Self::key_for(token_hash))
            .await
            .map_err(|e| TokenRepositoryError::StorageError(e.to_string()))?;

        Ok(exists)
    }
}
