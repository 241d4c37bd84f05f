use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    HashFailed,
    VerifyFailed,
    TaskFailed,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::HashFailed => write!(f, "Password hashing failed"),
            HashError::VerifyFailed => write!(f, "Password verification failed"),
            HashError::TaskFailed => write!(f, "Hashing task failed to complete"),
        }
    }
}

impl std::error::Error for HashError {}

/// Hashing runs off the async executor; implementations are expected to
/// use a blocking pool for the KDF work.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
