use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::ImageWithVersions;

#[derive(Debug, Clone, PartialEq)]
pub struct AddImageCommand {
    pub owner: UserId,
    pub project_id: Uuid,
    pub original_url: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddImageError {
    InvalidInput(String),
    ProjectNotFound,
    RepositoryError(String),
}

impl fmt::Display for AddImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddImageError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            AddImageError::ProjectNotFound => write!(f, "project not found"),
            AddImageError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait AddImageUseCase: Send + Sync {
    async fn execute(&self, command: AddImageCommand) -> Result<ImageWithVersions, AddImageError>;
}
