use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::{ImageWithVersions, Project};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the catalogue. Other modules use it for ownership checks.
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Newest first.
    async fn list_projects(&self, owner: UserId) -> Result<Vec<Project>, ProjectQueryError>;

    /// `None` when missing or owned by someone else.
    async fn find_project(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<Option<Project>, ProjectQueryError>;

    /// Newest image first.
    async fn list_images(&self, project_id: Uuid)
        -> Result<Vec<ImageWithVersions>, ProjectQueryError>;

    /// The subset of `image_ids` that belong to the project.
    async fn image_ids_in_project(
        &self,
        project_id: Uuid,
        image_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, ProjectQueryError>;

    /// The subset of `version_ids` whose image belongs to the project.
    async fn version_ids_in_project(
        &self,
        project_id: Uuid,
        version_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, ProjectQueryError>;
}
