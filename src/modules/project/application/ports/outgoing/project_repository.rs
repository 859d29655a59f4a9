use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::{ImageWithVersions, Project};

#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub owner: UserId,
    pub name: String,
    pub client_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewImage {
    pub project_id: Uuid,
    pub original_url: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError>;

    /// Image row plus its ORIGINAL version, atomically.
    async fn add_image(&self, data: NewImage) -> Result<ImageWithVersions, ProjectRepositoryError>;
}
