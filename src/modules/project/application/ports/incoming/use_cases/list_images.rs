use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::ImageWithVersions;

#[derive(Debug, Clone, PartialEq)]
pub enum ListImagesError {
    ProjectNotFound,
    QueryFailed(String),
}

impl fmt::Display for ListImagesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListImagesError::ProjectNotFound => write!(f, "project not found"),
            ListImagesError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListImagesUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<Vec<ImageWithVersions>, ListImagesError>;
}
