pub mod email_service;
pub mod password_reset;

pub use email_service::EmailService;
pub use password_reset::PasswordResetEmailService;
