use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::ProjectDetail;

#[derive(Debug, Clone, PartialEq)]
pub enum GetProjectError {
    /// Missing, or owned by another user.
    ProjectNotFound,
    QueryFailed(String),
}

impl fmt::Display for GetProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProjectError::ProjectNotFound => write!(f, "project not found"),
            GetProjectError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<ProjectDetail, GetProjectError>;
}
