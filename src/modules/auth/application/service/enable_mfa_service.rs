use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::domain::totp;
use crate::modules::auth::application::ports::incoming::use_cases::{
    EnableMfaError, EnableMfaUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserRepository, UserRepositoryError,
};

pub struct EnableMfaService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
}

impl<Q, R> EnableMfaService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(user_query: Q, user_repository: R) -> Self {
        Self {
            user_query,
            user_repository,
        }
    }
}

#[async_trait]
impl<Q, R> EnableMfaUseCase for EnableMfaService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, user_id: UserId, code: &str) -> Result<(), EnableMfaError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| EnableMfaError::RepositoryError(e.to_string()))?
            .ok_or(EnableMfaError::UserNotFound)?;

        let secret = user.mfa_secret.as_deref().ok_or(EnableMfaError::MfaNotSetup)?;

        let valid = totp::verify(secret, code, Utc::now().timestamp()).map_err(|e| {
            warn!(user_id = %user_id, error = %e, "Pending MFA secret is unreadable");
            EnableMfaError::MfaNotSetup
        })?;
        if !valid {
            return Err(EnableMfaError::MfaInvalid);
        }

        self.user_repository
            .set_mfa_enabled(user_id, true)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => EnableMfaError::UserNotFound,
                other => EnableMfaError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, "MFA enabled");
        Ok(())
    }
}
