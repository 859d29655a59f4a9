use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::auth::application::domain::entities::{User, UserId};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("email already registered")]
    EmailAlreadyExists,

    #[error("user not found")]
    NotFound,

    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: NewUser) -> Result<User, UserRepositoryError>;

    async fn record_login(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    async fn store_mfa_secret(
        &self,
        user_id: UserId,
        secret: String,
    ) -> Result<(), UserRepositoryError>;

    /// Disabling also clears the stored secret.
    async fn set_mfa_enabled(
        &self,
        user_id: UserId,
        enabled: bool,
    ) -> Result<(), UserRepositoryError>;
}
