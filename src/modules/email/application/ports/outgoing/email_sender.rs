use async_trait::async_trait;

/// Outbound mail port. Messages carry both a plain-text and an HTML body.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), String>;
}
