use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::modules::auth::application::domain::credentials::normalize_email;
use crate::modules::auth::application::domain::entities::TokenKind;
use crate::modules::auth::application::ports::incoming::use_cases::{
    RequestPasswordResetError, RequestPasswordResetUseCase,
};
use crate::modules::auth::application::ports::outgoing::{SingleUseTokenRepository, UserQuery};
use crate::modules::auth::application::service::SingleUseTokenIssuer;
use crate::modules::email::application::ports::outgoing::UserEmailNotifier;

pub struct RequestPasswordResetService<Q, T>
where
    Q: UserQuery,
    T: SingleUseTokenRepository,
{
    user_query: Q,
    tokens: SingleUseTokenIssuer<T>,
    notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q, T> RequestPasswordResetService<Q, T>
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
impl<Q, T> RequestPasswordResetUseCase for RequestPasswordResetService<Q, T>
where
    Q: UserQuery,
    T: SingleUseTokenRepository,
{
    async fn execute(&self, email: &str) -> Result<(), RequestPasswordResetError> {
        let email = normalize_email(email)
            .map_err(|e| RequestPasswordResetError::InvalidInput(e.to_string()))?;

        let Some(user) = self
            .user_query
            .find_by_email(&email)
            .await
            .map_err(|e| RequestPasswordResetError::RepositoryError(e.to_string()))?
        else {
            debug!("Password reset requested for unknown address");
            return Ok(());
        };

        let raw_token = self
            .tokens
            .issue(user.id, TokenKind::PasswordReset)
            .await
            .map_err(|e| RequestPasswordResetError::RepositoryError(e.to_string()))?;

        if let Err(e) = self
            .notifier
            .send_password_reset_email(&user.email, &user.display_name, &raw_token)
            .await
        {
            error!(user_id = %user.id, error = %e, "Password reset email could not be sent");
            return Ok(());
        }

        info!(user_id = %user.id, "Password reset email sent");
        Ok(())
    }
}
