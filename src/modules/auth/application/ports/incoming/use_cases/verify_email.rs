use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum VerifyEmailError {
    TokenInvalid,
    TokenUsed,
    TokenExpired,
    RepositoryError(String),
}

impl fmt::Display for VerifyEmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyEmailError::TokenInvalid => write!(f, "invalid verification token"),
            VerifyEmailError::TokenUsed => write!(f, "verification token already used"),
            VerifyEmailError::TokenExpired => write!(f, "verification token expired"),
            VerifyEmailError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait VerifyEmailUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), VerifyEmailError>;
}
