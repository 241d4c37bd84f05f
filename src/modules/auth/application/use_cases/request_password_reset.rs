use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, warn};

use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::modules::email::application::ports::outgoing::password_reset_notifier::PasswordResetNotifier;

pub const RESET_REQUESTED_MESSAGE: &str =
    "Check your email for the instructions to reset your password";

#[derive(Debug, Clone)]
pub struct RequestPasswordResetOutput {
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait IRequestPasswordResetUseCase: Send + Sync {
    async fn execute(
        &self,
        email: &str,
    ) -> Result<RequestPasswordResetOutput, RequestPasswordResetError>;
}

pub struct RequestPasswordResetUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    token_provider: Arc<dyn TokenProvider>,
    notifier: Arc<dyn PasswordResetNotifier>,
}

impl<Q> RequestPasswordResetUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        token_provider: Arc<dyn TokenProvider>,
        notifier: Arc<dyn PasswordResetNotifier>,
    ) -> Self {
        Self {
            query,
            token_provider,
            notifier,
        }
    }
}

#[async_trait]
impl<Q> IRequestPasswordResetUseCase for RequestPasswordResetUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        email: &str,
    ) -> Result<RequestPasswordResetOutput, RequestPasswordResetError> {
        // The response is the same whether or not the address is known,
        // so the endpoint cannot be used to probe for accounts.
        if let Some(user) = self.query.find_by_email(email).await? {
            match self.token_provider.generate_reset_token(user.id) {
                Ok(token) => {
                    let notifier = Arc::clone(&self.notifier);
                    let to = user.email.clone();
                    let username = user.username.clone();

                    // Fire-and-forget: the HTTP response never waits on
                    // SMTP, and a failed send is only visible in the logs.
                    tokio::spawn(async move {
                        if let Err(e) = notifier.send_password_reset(&to, &username, &token).await {
                            warn!(
                                username = %username,
                                error = %e,
                                "Failed to send password reset email"
                            );
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to generate password reset token");
                }
            }
        }

        Ok(RequestPasswordResetOutput {
            message: RESET_REQUESTED_MESSAGE.to_string(),
        })
    }
}
