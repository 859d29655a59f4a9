use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::domain::totp;
use crate::modules::auth::application::ports::incoming::use_cases::{
    MfaSetup, SetupMfaError, SetupMfaUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    UserQuery, UserRepository, UserRepositoryError,
};

/// Stores a fresh secret without enabling MFA; enabling needs a confirmed code.
pub struct SetupMfaService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
}

impl<Q, R> SetupMfaService<Q, R>
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
impl<Q, R> SetupMfaUseCase for SetupMfaService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, user_id: UserId) -> Result<MfaSetup, SetupMfaError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| SetupMfaError::RepositoryError(e.to_string()))?
            .ok_or(SetupMfaError::UserNotFound)?;

        if user.mfa_enabled {
            return Err(SetupMfaError::MfaAlreadyEnabled);
        }

        let secret = totp::generate_secret();

        self.user_repository
            .store_mfa_secret(user_id, secret.clone())
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => SetupMfaError::UserNotFound,
                other => SetupMfaError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, "MFA secret generated");

        Ok(MfaSetup {
            otpauth_url: totp::otpauth_url(&user.email, &secret),
            secret,
        })
    }
}
