use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::auth::application::domain::credentials::validate_password;
use crate::modules::auth::application::domain::entities::TokenKind;
use crate::modules::auth::application::ports::incoming::use_cases::{
    ResetPasswordCommand, ResetPasswordError, ResetPasswordUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    ConsumeTokenError, PasswordHasher, SingleUseTokenRepository, TokenEffect,
};
use crate::modules::auth::application::service::SingleUseTokenIssuer;

pub struct ResetPasswordService<T>
where
    T: SingleUseTokenRepository,
{
    tokens: SingleUseTokenIssuer<T>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<T> ResetPasswordService<T>
where
    T: SingleUseTokenRepository,
{
    pub fn new(token_repository: T, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            tokens: SingleUseTokenIssuer::new(token_repository),
            password_hasher,
        }
    }
}

#[async_trait]
impl<T> ResetPasswordUseCase for ResetPasswordService<T>
where
    T: SingleUseTokenRepository,
{
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        validate_password(&command.new_password)
            .map_err(|e| ResetPasswordError::InvalidInput(e.to_string()))?;

        if command.token.trim().is_empty() {
            return Err(ResetPasswordError::TokenInvalid);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&command.new_password)
            .await
            .map_err(|e| ResetPasswordError::Internal(e.to_string()))?;

        let user_id = self
            .tokens
            .consume(
                &command.token,
                TokenKind::PasswordReset,
                TokenEffect::SetPasswordHash(password_hash),
            )
            .await
            .map_err(|e| match e {
                ConsumeTokenError::NotFound => ResetPasswordError::TokenInvalid,
                ConsumeTokenError::AlreadyUsed => ResetPasswordError::TokenUsed,
                ConsumeTokenError::Expired => ResetPasswordError::TokenExpired,
                ConsumeTokenError::DatabaseError(msg) => ResetPasswordError::RepositoryError(msg),
            })?;

        info!(user_id = %user_id, "Password reset");
        Ok(())
    }
}
