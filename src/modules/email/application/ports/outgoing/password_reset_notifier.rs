use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone)]
pub enum PasswordResetNotifyError {
    EmailSendingFailed(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for PasswordResetNotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordResetNotifyError::EmailSendingFailed(msg) => {
                write!(f, "Email sending failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for PasswordResetNotifyError {}

/// Sends the password-reset message for a user. Callers dispatch this
/// fire-and-forget; delivery failures never reach the request that
/// triggered them.
#[async_trait]
pub trait PasswordResetNotifier: Send + Sync {
    async fn send_password_reset(
        &self,
        to: &str,
        username: &str,
        token: &str,
    ) -> Result<(), PasswordResetNotifyError>;
}
