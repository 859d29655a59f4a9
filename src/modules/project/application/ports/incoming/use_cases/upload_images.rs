use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::ImageWithVersions;
use crate::modules::project::application::domain::upload::UploadFile;

#[derive(Debug, Clone, PartialEq)]
pub enum UploadImagesError {
    InvalidInput(String),
    ProjectNotFound,
    StorageNotConfigured,
    StorageFailed(String),
    RepositoryError(String),
}

impl fmt::Display for UploadImagesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadImagesError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            UploadImagesError::ProjectNotFound => write!(f, "project not found"),
            UploadImagesError::StorageNotConfigured => write!(f, "storage not configured"),
            UploadImagesError::StorageFailed(msg) => write!(f, "storage failed: {}", msg),
            UploadImagesError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UploadImagesUseCase: Send + Sync {
    /// Stores every file, then registers each as an image with an ORIGINAL version.
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
        files: Vec<UploadFile>,
    ) -> Result<Vec<ImageWithVersions>, UploadImagesError>;
}
