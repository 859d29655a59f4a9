use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaSetup {
    pub secret: String,
    pub otpauth_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SetupMfaError {
    UserNotFound,
    MfaAlreadyEnabled,
    RepositoryError(String),
}

impl fmt::Display for SetupMfaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupMfaError::UserNotFound => write!(f, "user not found"),
            SetupMfaError::MfaAlreadyEnabled => write!(f, "MFA already enabled"),
            SetupMfaError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait SetupMfaUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<MfaSetup, SetupMfaError>;
}
