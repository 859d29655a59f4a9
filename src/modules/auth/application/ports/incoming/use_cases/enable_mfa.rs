use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum EnableMfaError {
    UserNotFound,
    MfaNotSetup,
    MfaInvalid,
    RepositoryError(String),
}

impl fmt::Display for EnableMfaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnableMfaError::UserNotFound => write!(f, "user not found"),
            EnableMfaError::MfaNotSetup => write!(f, "MFA has not been set up"),
            EnableMfaError::MfaInvalid => write!(f, "invalid MFA code"),
            EnableMfaError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait EnableMfaUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, code: &str) -> Result<(), EnableMfaError>;
}
