use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::modules::auth::application::ports::outgoing::token_hasher::hash_token;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};

// ========================= Logout Request =========================
#[derive(Debug, Clone)]
pub struct LogoutRequest {
    refresh_token: Option<String>,
}

impl LogoutRequest {
    pub fn new(refresh_token: Option<String>) -> Self {
        Self {
            refresh_token: refresh_token.map(|t| t.trim().to_string()),
        }
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

// ====================== Logout Response =============================
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

// ====================== Logout Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Token revocation failed: {0}")]
    TokenRevocationFailed(String),
}

impl From<TokenRepositoryError> for LogoutError {
    fn from(error: TokenRepositoryError) -> Self {
        LogoutError::TokenRevocationFailed(error.to_string())
    }
}

// ============================ Logout Use Case =============================
#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError>;
}

pub struct LogoutUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LogoutUseCase<R>
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
impl<R> ILogoutUseCase for LogoutUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        // If a refresh token was provided, revoke it
        if let Some(refresh_token) = request.refresh_token() {
            match self.token_provider.verify_token(refresh_token) {
                Ok(claims) => {
                    // Hash the token before storing (NEVER store raw tokens!)
                    let token_hash = hash_token(refresh_token);

                    let expires_at = chrono::DateTime::from_timestamp(claims.exp, 0)
                        .unwrap_or_else(|| chrono::Utc::now() + chrono::Duration::days(7));

                    self.token_repository
                        .revoke_token(token_hash, claims.sub, expires_at)
                        .await?;

                    info!("Refresh token revoked for user: {}", claims.sub);
                }
                Err(e) => {
                    // Token invalid or expired - still return success.
                    // Logout always succeeds from the user's perspective.
                    warn!("Failed to verify token during logout: {}", e);
                }
            }
        }

        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}
