use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::TokenKind;
use crate::modules::auth::application::ports::incoming::use_cases::{
    VerifyEmailError, VerifyEmailUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    ConsumeTokenError, SingleUseTokenRepository, TokenEffect,
};
use crate::modules::auth::application::service::SingleUseTokenIssuer;

pub struct VerifyEmailService<T>
where
    T: SingleUseTokenRepository,
{
    tokens: SingleUseTokenIssuer<T>,
}

impl<T> VerifyEmailService<T>
where
    T: SingleUseTokenRepository,
{
    pub fn new(token_repository: T) -> Self {
        Self {
            tokens: SingleUseTokenIssuer::new(token_repository),
        }
    }
}

#[async_trait]
impl<T> VerifyEmailUseCase for VerifyEmailService<T>
where
    T: SingleUseTokenRepository,
{
    async fn execute(&self, token: &str) -> Result<(), VerifyEmailError> {
        let user_id = self
            .tokens
            .consume(
                token,
                TokenKind::EmailVerification,
                TokenEffect::MarkEmailVerified,
            )
            .await
            .map_err(|e| match e {
                ConsumeTokenError::NotFound => VerifyEmailError::TokenInvalid,
                ConsumeTokenError::AlreadyUsed => VerifyEmailError::TokenUsed,
                ConsumeTokenError::Expired => VerifyEmailError::TokenExpired,
                ConsumeTokenError::DatabaseError(msg) => VerifyEmailError::RepositoryError(msg),
            })?;

        info!(user_id = %user_id, "Email verified");
        Ok(())
    }
}
