use chrono::Utc;

use crate::modules::auth::application::domain::entities::{TokenKind, UserId};
use crate::modules::auth::application::domain::single_use_token::{
    expiry_from, generate_raw_token, hash_token,
};
use crate::modules::auth::application::ports::outgoing::{
    ConsumeTokenError, IssueTokenData, SingleUseTokenRepository, TokenEffect,
    TokenRepositoryError,
};

/// Issues and consumes single-use tokens. Raw values never reach the repository.
#[derive(Clone)]
pub struct SingleUseTokenIssuer<T>
where
    T: SingleUseTokenRepository,
{
    repository: T,
}

impl<T> SingleUseTokenIssuer<T>
where
    T: SingleUseTokenRepository,
{
    pub fn new(repository: T) -> Self {
        Self { repository }
    }

    pub async fn issue(
        &self,
        user_id: UserId,
        kind: TokenKind,
    ) -> Result<String, TokenRepositoryError> {
        let raw = generate_raw_token();

        self.repository
            .issue(IssueTokenData {
                user_id,
                kind,
                token_hash: hash_token(&raw),
                expires_at: expiry_from(Utc::now()),
            })
            .await?;

        Ok(raw)
    }

    pub async fn consume(
        &self,
        raw: &str,
        kind: TokenKind,
        effect: TokenEffect,
    ) -> Result<UserId, ConsumeTokenError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConsumeTokenError::NotFound);
        }

        self.repository
            .consume(kind, &hash_token(raw), Utc::now(), effect)
            .await
    }
}
