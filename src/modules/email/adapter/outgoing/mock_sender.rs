use crate::modules::email::application::ports::outgoing::email_sender::EmailSender;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory sender for tests: records every message instead of sending.
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<(String, String, String, String)>>>,
    should_fail: bool,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    /// (to, subject, text_body, html_body) tuples in send order
    pub fn get_sent_emails(&self) -> Vec<(String, String, String, String)> {
        self.sent_emails.lock().unwrap().clone()
    }
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), String> {
        if self.should_fail {
            return Err("mock sender configured to fail".to_string());
        }

        self.sent_emails.lock().unwrap().push((
            to.to_string(),
            subject.to_string(),
            text_body.to_string(),
            html_body.to_string(),
        ));
        Ok(())
    }
}
