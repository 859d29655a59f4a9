use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::ListingWithMedia;

#[derive(Debug, Clone, PartialEq)]
pub struct AttachMediaCommand {
    pub owner: UserId,
    pub listing_id: Uuid,
    pub image_version_ids: Vec<Uuid>,
    pub hero_image_version_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttachMediaError {
    InvalidInput(String),
    ListingNotFound,
    InvalidImageVersions,
    RepositoryError(String),
}

impl fmt::Display for AttachMediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachMediaError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            AttachMediaError::ListingNotFound => write!(f, "listing not found"),
            AttachMediaError::InvalidImageVersions => {
                write!(f, "image versions do not belong to the listing's project")
            }
            AttachMediaError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait AttachMediaUseCase: Send + Sync {
    /// Replaces the whole gallery.
    async fn execute(&self, command: AttachMediaCommand)
        -> Result<ListingWithMedia, AttachMediaError>;
}
