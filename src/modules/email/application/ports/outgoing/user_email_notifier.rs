#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        to: &str,
        display_name: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_password_reset_email(
        &self,
        to: &str,
        display_name: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError>;
}
