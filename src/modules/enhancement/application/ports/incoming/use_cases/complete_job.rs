use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::enhancement::application::domain::entities::EnhancementJob;

#[derive(Debug, Clone, PartialEq)]
pub enum CompleteJobError {
    InvalidInput(String),
    JobNotFound,
    RepositoryError(String),
}

impl fmt::Display for CompleteJobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompleteJobError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            CompleteJobError::JobNotFound => write!(f, "job not found"),
            CompleteJobError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait CompleteJobUseCase: Send + Sync {
    /// Records the enhanced result. Repeating the call returns the same job.
    async fn execute(
        &self,
        owner: UserId,
        job_id: Uuid,
        enhanced_url: &str,
    ) -> Result<EnhancementJob, CompleteJobError>;
}
