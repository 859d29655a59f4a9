use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ResendVerificationError {
    InvalidInput(String),
    UserNotFound,
    AlreadyVerified,
    EmailDeliveryFailed(String),
    RepositoryError(String),
}

impl fmt::Display for ResendVerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResendVerificationError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            ResendVerificationError::UserNotFound => write!(f, "user not found"),
            ResendVerificationError::AlreadyVerified => write!(f, "email already verified"),
            ResendVerificationError::EmailDeliveryFailed(msg) => {
                write!(f, "verification email failed: {}", msg)
            }
            ResendVerificationError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait ResendVerificationUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), ResendVerificationError>;
}
