use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::AdCopy;
use crate::modules::project::application::ports::outgoing::AdCopyPatch;

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAdCopyError {
    InvalidInput(String),
    /// The ad copy is missing, belongs to another project, or the project is not the caller's.
    AdCopyNotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateAdCopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateAdCopyError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            UpdateAdCopyError::AdCopyNotFound => write!(f, "ad copy not found"),
            UpdateAdCopyError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateAdCopyUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
        ad_copy_id: Uuid,
        patch: AdCopyPatch,
    ) -> Result<AdCopy, UpdateAdCopyError>;
}
