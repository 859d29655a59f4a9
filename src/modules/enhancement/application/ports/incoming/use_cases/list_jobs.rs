use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::enhancement::application::domain::entities::EnhancementJob;

#[derive(Debug, Clone, PartialEq)]
pub enum ListJobsError {
    ProjectNotFound,
    RepositoryError(String),
}

impl fmt::Display for ListJobsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListJobsError::ProjectNotFound => write!(f, "project not found"),
            ListJobsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListJobsUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<Vec<EnhancementJob>, ListJobsError>;
}
