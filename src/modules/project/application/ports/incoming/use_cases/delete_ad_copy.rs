use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteAdCopyError {
    AdCopyNotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteAdCopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteAdCopyError::AdCopyNotFound => write!(f, "ad copy not found"),
            DeleteAdCopyError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeleteAdCopyUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
        ad_copy_id: Uuid,
    ) -> Result<(), DeleteAdCopyError>;
}
