use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::AdCopy;

#[derive(Debug, Clone, PartialEq)]
pub enum ListAdCopiesError {
    ProjectNotFound,
    RepositoryError(String),
}

impl fmt::Display for ListAdCopiesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListAdCopiesError::ProjectNotFound => write!(f, "project not found"),
            ListAdCopiesError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListAdCopiesUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<Vec<AdCopy>, ListAdCopiesError>;
}
