use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown username and wrong password are indistinguishable on
    /// purpose.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenError(String),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] UserRepositoryError),
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, input: LoginInput) -> Result<LoginOutput, LoginError>;
}

pub struct LoginUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> LoginUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> ILoginUserUseCase for LoginUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: LoginInput) -> Result<LoginOutput, LoginError> {
        let user = self
            .query
            .find_by_username(&input.username)
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        let password_ok = self
            .password_hasher
            .verify_password(&input.password, &user.password_hash)
            .await
            .map_err(|e| LoginError::HashingFailed(e.to_string()))?;

        if !password_ok {
            return Err(LoginError::InvalidCredentials);
        }

        // The login moment is the last_seen stamp
        self.repository.touch_last_seen(user.id).await?;

        let access_token = self
            .token_provider
            .generate_access_token(user.id)
            .map_err(|e| LoginError::TokenError(e.to_string()))?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id)
            .map_err(|e| LoginError::TokenError(e.to_string()))?;

        Ok(LoginOutput {
            user_id: user.id,
            username: user.username,
            email: user.email,
            access_token,
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::modules::auth::application::ports::outgoing::password_hasher::HashError;
    use crate::modules::auth::application::ports::outgoing::user_query::UserQueryResult;
    use crate::modules::auth::application::ports::outgoing::user_repository::{
        CreateUserData, UserRecord,
    };
    use std::sync::atomic::{AtomicBool, Ordering};

    struct MockUserQuery {
        known_user: Option<UserQueryResult>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            Ok(self.known_user.clone().filter(|u| u.username == username))
        }
    }

    struct MockUserRepository {
        touched: Arc<AtomicBool>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(
            &self,
            _user: CreateUserData,
        ) -> Result<UserRecord, UserRepositoryError> {
            unimplemented!()
        }

        async fn update_profile(
            &self,
            _user_id: Uuid,
            _username: String,
            _about_me: Option<String>,
        ) -> Result<UserRecord, UserRepositoryError> {
            unimplemented!()
        }

        async fn update_password(
            &self,
            _user_id: Uuid,
            _new_password_hash: String,
        ) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }

        async fn touch_last_seen(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
            self.touched.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn delete_user(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }
    }

    struct MockPasswordHasher {
        verify_result: bool,
    }

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Ok("hashed_password".to_string())
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(self.verify_result)
        }
    }

    fn test_token_provider() -> Arc<dyn TokenProvider> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret_key: "FAKE_TEST_SECRET_KEY_32_BYTES_MIN!".to_string(),
            issuer: "test".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 86400,
            reset_token_expiry: 600,
        }))
    }

    fn known_user(username: &str) -> UserQueryResult {
        let now = chrono::Utc::now();
        UserQueryResult {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: "hashed_password".to_string(),
            about_me: None,
            last_seen: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_login_success_touches_last_seen() {
        let touched = Arc::new(AtomicBool::new(false));

        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                known_user: Some(known_user("susan")),
            },
            MockUserRepository {
                touched: touched.clone(),
            },
            Arc::new(MockPasswordHasher {
                verify_result: true,
            }),
            test_token_provider(),
        );

        let result = use_case
            .execute(LoginInput {
                username: "susan".to_string(),
                password: "password123".to_string(),
            })
            .await;

        assert!(result.is_ok());
        let output = result.unwrap();
        assert_eq!(output.username, "susan");
        assert!(!output.access_token.is_empty());
        assert!(!output.refresh_token.is_empty());
        assert!(touched.load(Ordering::SeqCst), "login must stamp last_seen");
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery { known_user: None },
            MockUserRepository {
                touched: Arc::new(AtomicBool::new(false)),
            },
            Arc::new(MockPasswordHasher {
                verify_result: true,
            }),
            test_token_provider(),
        );

        let result = use_case
            .execute(LoginInput {
                username: "ghost".to_string(),
                password: "password123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let touched = Arc::new(AtomicBool::new(false));

        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                known_user: Some(known_user("susan")),
            },
            MockUserRepository {
                touched: touched.clone(),
            },
            Arc::new(MockPasswordHasher {
                verify_result: false,
            }),
            test_token_provider(),
        );

        let result = use_case
            .execute(LoginInput {
                username: "susan".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
        assert!(
            !touched.load(Ordering::SeqCst),
            "failed login must not stamp last_seen"
        );
    }

    #[tokio::test]
    async fn test_login_error_messages_do_not_leak_which_field_failed() {
        // Unknown user and wrong password must produce the same error
        let unknown = LoginError::InvalidCredentials.to_string();
        assert_eq!(unknown, "Incorrect username or password");
    }
}
