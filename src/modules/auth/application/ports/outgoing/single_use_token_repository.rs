use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::auth::application::domain::entities::{TokenKind, UserId};

#[derive(Debug, Clone)]
pub struct IssueTokenData {
    pub user_id: UserId,
    pub kind: TokenKind,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}

/// Applied in the same transaction that marks the token used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenEffect {
    MarkEmailVerified,
    SetPasswordHash(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsumeTokenError {
    #[error("token not found")]
    NotFound,

    #[error("token already used")]
    AlreadyUsed,

    #[error("token expired")]
    Expired,

    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SingleUseTokenRepository: Send + Sync {
    async fn issue(&self, data: IssueTokenData) -> Result<(), TokenRepositoryError>;

    async fn consume(
        &self,
        kind: TokenKind,
        token_hash: &str,
        now: DateTime<Utc>,
        effect: TokenEffect,
    ) -> Result<UserId, ConsumeTokenError>;
}
