use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::AdCopy;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAdCopyCommand {
    pub owner: UserId,
    pub project_id: Uuid,
    pub channel: String,
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateAdCopyError {
    InvalidInput(String),
    ProjectNotFound,
    RepositoryError(String),
}

impl fmt::Display for CreateAdCopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateAdCopyError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            CreateAdCopyError::ProjectNotFound => write!(f, "project not found"),
            CreateAdCopyError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateAdCopyUseCase: Send + Sync {
    async fn execute(&self, command: CreateAdCopyCommand) -> Result<AdCopy, CreateAdCopyError>;
}
