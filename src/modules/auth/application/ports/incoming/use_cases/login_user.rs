use async_trait::async_trait;
use std::fmt;

use super::AuthSession;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
    pub mfa_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginError {
    InvalidCredentials,
    MfaRequired,
    MfaInvalid,
    /// MFA is flagged on but no secret is stored.
    MfaMisconfigured,
    RepositoryError(String),
    Internal(String),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "invalid email or password"),
            LoginError::MfaRequired => write!(f, "MFA code required"),
            LoginError::MfaInvalid => write!(f, "invalid MFA code"),
            LoginError::MfaMisconfigured => write!(f, "MFA enabled without a secret"),
            LoginError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
            LoginError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError>;
}
