use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestPasswordResetError {
    InvalidInput(String),
    RepositoryError(String),
}

impl fmt::Display for RequestPasswordResetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestPasswordResetError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            RequestPasswordResetError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

/// Succeeds for unknown addresses too, and when the reset email cannot be delivered.
#[async_trait]
pub trait RequestPasswordResetUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), RequestPasswordResetError>;
}
