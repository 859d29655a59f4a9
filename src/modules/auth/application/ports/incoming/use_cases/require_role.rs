use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::{Role, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum RequireRoleError {
    Forbidden,
    RepositoryError(String),
}

impl fmt::Display for RequireRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequireRoleError::Forbidden => write!(f, "missing required role"),
            RequireRoleError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait RequireRoleUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, role: Role) -> Result<(), RequireRoleError>;
}
