use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::domain::totp;
use crate::modules::auth::application::ports::incoming::use_cases::{
    DisableMfaError, DisableMfaUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserRepository, UserRepositoryError,
};

/// Turning MFA off needs a current code and clears the stored secret.
pub struct DisableMfaService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
}

impl<Q, R> DisableMfaService<Q, R>
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
impl<Q, R> DisableMfaUseCase for DisableMfaService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, user_id: UserId, code: &str) -> Result<(), DisableMfaError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| DisableMfaError::RepositoryError(e.to_string()))?
            .ok_or(DisableMfaError::UserNotFound)?;

        let secret = match (&user.mfa_secret, user.mfa_enabled) {
            (Some(secret), true) => secret,
            _ => return Err(DisableMfaError::MfaNotEnabled),
        };

        let valid = totp::verify(secret, code, Utc::now().timestamp()).unwrap_or(false);
        if !valid {
            return Err(DisableMfaError::MfaInvalid);
        }

        self.user_repository
            .set_mfa_enabled(user_id, false)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => DisableMfaError::UserNotFound,
                other => DisableMfaError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, "MFA disabled");
        Ok(())
    }
}
