use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResetPasswordError {
    InvalidInput(String),
    TokenInvalid,
    TokenUsed,
    TokenExpired,
    RepositoryError(String),
    Internal(String),
}

impl fmt::Display for ResetPasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResetPasswordError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            ResetPasswordError::TokenInvalid => write!(f, "invalid reset token"),
            ResetPasswordError::TokenUsed => write!(f, "reset token already used"),
            ResetPasswordError::TokenExpired => write!(f, "reset token expired"),
            ResetPasswordError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
            ResetPasswordError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ResetPasswordUseCase: Send + Sync {
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError>;
}
