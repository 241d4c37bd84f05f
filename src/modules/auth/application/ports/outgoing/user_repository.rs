use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

/// Write-side data for a new account.
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub about_me: Option<String>,
}

/// Confirmation DTO returned by mutating operations.
///
/// Deliberately excludes the password hash.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub about_me: Option<String>,
}

#[async_trait]
pub trait UserRepository {
    async fn create_user(&self, user: CreateUserData) -> Result<UserRecord, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        username: String,
        about_me: Option<String>,
    ) -> Result<UserRecord, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    /// Stamps `last_seen` with the current time.
    async fn touch_last_seen(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;

    /// Hard delete. Posts and follow rows go with it (FK cascade).
    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}

#[derive(Debug, Clone)]
pub enum UserRepositoryError {
    UserAlreadyExists,
    UserNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::UserNotFound => write!(f, "User not found"),
            UserRepositoryError::UserAlreadyExists => write!(f, "User already exists"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for UserRepositoryError {}
