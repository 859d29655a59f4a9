use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::{Listing, ListingFields};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateListingCommand {
    pub owner: UserId,
    pub project_id: Uuid,
    pub fields: ListingFields,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateListingError {
    InvalidInput(String),
    ProjectNotFound,
    RepositoryError(String),
}

impl fmt::Display for CreateListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateListingError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            CreateListingError::ProjectNotFound => write!(f, "project not found"),
            CreateListingError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateListingUseCase: Send + Sync {
    async fn execute(&self, command: CreateListingCommand) -> Result<Listing, CreateListingError>;
}
