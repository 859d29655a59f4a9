use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: Option<String>,
    pub html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailSendError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("could not build message: {0}")]
    BuildFailed(String),

    #[error("transport failed: {0}")]
    TransportFailed(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Returns the transport's message id.
    async fn send(&self, email: OutgoingEmail) -> Result<String, EmailSendError>;
}
