use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::modules::auth::application::domain::credentials::normalize_email;
use crate::modules::auth::application::domain::entities::TokenKind;
use crate::modules::auth::application::ports::incoming::use_cases::{
    ResendVerificationError, ResendVerificationUseCase,
};
use crate::modules::auth::application::ports::outgoing::{SingleUseTokenRepository, UserQuery};
use crate::modules::auth::application::service::SingleUseTokenIssuer;
use crate::modules::email::application::ports::outgoing::UserEmailNotifier;

pub struct ResendVerificationService<Q, T>
where
    Q: UserQuery,
    T: SingleUseTokenRepository,
{
    user_query: Q,
    tokens: SingleUseTokenIssuer<T>,
    notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q, T> ResendVerificationService<Q, T>
where
    Q: UserQuery,
    T: SingleUseTokenRepository,
{
    pub fn new(user_query: Q, token_repository: T, notifier: Arc<dyn UserEmailNotifier>) -> Self {
        Self {
            user_query,
            tokens: SingleUseTokenIssuer::new(token_repository),
            notifier,
        }
    }
}

#[async_trait]
impl<Q, T> ResendVerificationUseCase for ResendVerificationService<Q, T>
where
    Q: UserQuery,
    T: SingleUseTokenRepository,
{
    async fn execute(&self, email: &str) -> Result<(), ResendVerificationError> {
        let email = normalize_email(email)
            .map_err(|e| ResendVerificationError::InvalidInput(e.to_string()))?;

        let user = self
            .user_query
            .find_by_email(&email)
            .await
            .map_err(|e| ResendVerificationError::RepositoryError(e.to_string()))?
            .ok_or(ResendVerificationError::UserNotFound)?;

        if user.is_email_verified() {
            return Err(ResendVerificationError::AlreadyVerified);
        }

        let raw_token = self
            .tokens
            .issue(user.id, TokenKind::EmailVerification)
            .await
            .map_err(|e| ResendVerificationError::RepositoryError(e.to_string()))?;

        self.notifier
            .send_verification_email(&user.email, &user.display_name, &raw_token)
            .await
            .map_err(|e| {
                error!(user_id = %user.id, error = %e, "Verification email could not be resent");
                ResendVerificationError::EmailDeliveryFailed(e.to_string())
            })?;

        info!(user_id = %user.id, "Verification email resent");
        Ok(())
    }
}
