use async_trait::async_trait;
use std::fmt;

use super::AuthSession;

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterUserError {
    InvalidInput(String),
    EmailTaken,
    EmailDeliveryFailed(String),
    RepositoryError(String),
    Internal(String),
}

impl fmt::Display for RegisterUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterUserError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            RegisterUserError::EmailTaken => write!(f, "email already registered"),
            RegisterUserError::EmailDeliveryFailed(msg) => {
                write!(f, "verification email failed: {}", msg)
            }
            RegisterUserError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
            RegisterUserError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<AuthSession, RegisterUserError>;
}
