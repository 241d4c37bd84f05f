use async_trait::async_trait;

use crate::modules::email::application::ports::outgoing::password_reset_notifier::{
    PasswordResetNotifier, PasswordResetNotifyError,
};
use crate::modules::email::application::services::EmailService;

const SUBJECT: &str = "[Microblog] Reset your password";

/// Renders the two reset-password bodies (plain text and HTML) and hands
/// them to the mail transport.
#[derive(Clone, Debug)]
pub struct PasswordResetEmailService {
    email_service: EmailService,
    app_url: String,
}

impl PasswordResetEmailService {
    pub fn new(email_service: EmailService, app_url: String) -> Self {
        Self {
            email_service,
            app_url: app_url.trim_end_matches('/').to_string(),
        }
    }

    fn reset_link(&self, token: &str) -> String {
        format!("{}/api/auth/reset-password/{}", self.app_url, token)
    }

    fn render_text(&self, username: &str, token: &str) -> String {
        format!(
            "Dear {username},\n\n\
             To reset your password click on the following link:\n\n\
             {link}\n\n\
             If you have not requested a password reset simply ignore this message.\n\n\
             Sincerely,\n\n\
             The Microblog Team",
            username = username,
            link = self.reset_link(token),
        )
    }

    fn render_html(&self, username: &str, token: &str) -> String {
        format!(
            "<p>Dear {username},</p>\n\
             <p>\n    To reset your password\n    <a href=\"{link}\">click here</a>.\n</p>\n\
             <p>Alternatively, you can paste the following link in your browser's address bar:</p>\n\
             <p>{link}</p>\n\
             <p>If you have not requested a password reset simply ignore this message.</p>\n\
             <p>Sincerely,</p>\n\
             <p>The Microblog Team</p>",
            username = username,
            link = self.reset_link(token),
        )
    }
}

#[async_trait]
impl PasswordResetNotifier for PasswordResetEmailService {
    async fn send_password_reset(
        &self,
        to: &str,
        username: &str,
        token: &str,
    ) -> Result<(), PasswordResetNotifyError> {
        let text_body = self.render_text(username, token);
        let html_body = self.render_html(username, token);

        self.email_service
            .send_email(to, SUBJECT, &text_body, &html_body)
            .await
            .map_err(PasswordResetNotifyError::EmailSendingFailed)
    }
}
