use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{Role, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RoleQueryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Roles are looked up on every privileged call, never read from the session token.
#[async_trait]
pub trait RoleQuery: Send + Sync {
    async fn roles_for_user(&self, user_id: UserId) -> Result<Vec<Role>, RoleQueryError>;
}
