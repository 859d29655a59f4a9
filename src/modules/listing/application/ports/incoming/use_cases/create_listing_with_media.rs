use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::{ListingFields, ListingWithMedia};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateListingWithMediaCommand {
    pub owner: UserId,
    pub project_id: Uuid,
    pub fields: ListingFields,
    pub image_version_ids: Vec<Uuid>,
    pub hero_image_version_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateListingWithMediaError {
    InvalidInput(String),
    ProjectNotFound,
    InvalidImageVersions,
    RepositoryError(String),
}

impl fmt::Display for CreateListingWithMediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateListingWithMediaError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            CreateListingWithMediaError::ProjectNotFound => write!(f, "project not found"),
            CreateListingWithMediaError::InvalidImageVersions => {
                write!(f, "image versions do not belong to the project")
            }
            CreateListingWithMediaError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait CreateListingWithMediaUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateListingWithMediaCommand,
    ) -> Result<ListingWithMedia, CreateListingWithMediaError>;
}
