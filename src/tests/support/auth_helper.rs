use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

/// Token provider with a fixed test secret, registered as app data so the
/// `AuthenticatedUser` extractor works inside handler tests.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: "FAKE_TEST_SECRET_KEY_32_BYTES_MIN!".to_string(),
        issuer: "test".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
        reset_token_expiry: 600,
    }))
}

/// `Authorization` header value for a freshly issued access token.
pub fn bearer_for(provider: &Arc<dyn TokenProvider + Send + Sync>, user_id: Uuid) -> String {
    let token = provider
        .generate_access_token(user_id)
        .expect("test token generation must succeed");
    format!("Bearer {}", token)
}
