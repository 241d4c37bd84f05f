pub mod email_sender;
pub mod password_reset_notifier;

pub use email_sender::EmailSender;
pub use password_reset_notifier::{PasswordResetNotifier, PasswordResetNotifyError};
