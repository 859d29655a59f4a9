use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::AdCopy;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq)]
pub struct NewAdCopy {
    pub project_id: Uuid,
    pub channel: String,
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
}

/// Only the present fields are written.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdCopyPatch {
    pub channel: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: PatchField<String>,
}

impl AdCopyPatch {
    pub fn is_empty(&self) -> bool {
        self.channel.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.keywords.is_unset()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdCopyRepositoryError {
    #[error("Ad copy not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Every lookup is scoped to a project, so an id from another project is never found.
#[async_trait]
pub trait AdCopyRepository: Send + Sync {
    /// Newest first.
    async fn list_for_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<AdCopy>, AdCopyRepositoryError>;

    async fn create(&self, data: NewAdCopy) -> Result<AdCopy, AdCopyRepositoryError>;

    async fn update(
        &self,
        project_id: Uuid,
        ad_copy_id: Uuid,
        patch: AdCopyPatch,
    ) -> Result<AdCopy, AdCopyRepositoryError>;

    async fn delete(
        &self,
        project_id: Uuid,
        ad_copy_id: Uuid,
    ) -> Result<(), AdCopyRepositoryError>;
}
