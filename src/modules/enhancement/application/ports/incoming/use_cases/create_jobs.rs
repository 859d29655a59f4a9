use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::enhancement::application::domain::entities::EnhancementJob;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateJobsCommand {
    pub owner: UserId,
    pub project_id: Uuid,
    pub image_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateJobsError {
    InvalidInput(String),
    ProjectNotFound,
    InvalidImages,
    NoActiveSubscription,
    InsufficientCredits { required: i64, remaining: i64 },
    RepositoryError(String),
}

impl fmt::Display for CreateJobsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateJobsError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            CreateJobsError::ProjectNotFound => write!(f, "project not found"),
            CreateJobsError::InvalidImages => write!(f, "images do not belong to the project"),
            CreateJobsError::NoActiveSubscription => write!(f, "no active subscription"),
            CreateJobsError::InsufficientCredits {
                required,
                remaining,
            } => write!(
                f,
                "insufficient credits: {} required, {} remaining",
                required, remaining
            ),
            CreateJobsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CreateJobsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateJobsCommand,
    ) -> Result<Vec<EnhancementJob>, CreateJobsError>;
}
