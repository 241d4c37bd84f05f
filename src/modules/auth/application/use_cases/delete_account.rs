use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct DeleteAccountOutput {
    pub username: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] UserRepositoryError),
}

#[async_trait]
pub trait IDeleteAccountUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<DeleteAccountOutput, DeleteAccountError>;
}

pub struct DeleteAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IDeleteAccountUseCase for DeleteAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<DeleteAccountOutput, DeleteAccountError> {
        // The username outlives the row for the goodbye message
        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(DeleteAccountError::UserNotFound)?;

        match self.repository.delete_user(user_id).await {
            Ok(()) => Ok(DeleteAccountOutput {
                username: user.username,
            }),
            Err(UserRepositoryError::UserNotFound) => Err(DeleteAccountError::UserNotFound),
            Err(e) => Err(DeleteAccountError::RepositoryError(e)),
        }
    }
}
