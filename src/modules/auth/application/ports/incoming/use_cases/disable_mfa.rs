use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum DisableMfaError {
    UserNotFound,
    MfaNotEnabled,
    MfaInvalid,
    RepositoryError(String),
}

impl fmt::Display for DisableMfaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisableMfaError::UserNotFound => write!(f, "user not found"),
            DisableMfaError::MfaNotEnabled => write!(f, "MFA is not enabled"),
            DisableMfaError::MfaInvalid => write!(f, "invalid MFA code"),
            DisableMfaError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DisableMfaUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, code: &str) -> Result<(), DisableMfaError>;
}
