use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::enhancement::application::domain::entities::EnhancementJob;

/// A validated batch: the project is the owner's and every image belongs to it.
#[derive(Debug, Clone, PartialEq)]
pub struct JobAdmission {
    pub owner: UserId,
    pub project_id: Uuid,
    pub image_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnhancementJobRepositoryError {
    #[error("No active subscription")]
    NoActiveSubscription,

    #[error("Insufficient credits: {required} required, {remaining} remaining")]
    InsufficientCredits { required: i64, remaining: i64 },

    #[error("Job not found")]
    JobNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EnhancementJobRepository: Send + Sync {
    /// Locks the owner's active subscription, checks the remaining credits and records the jobs
    /// plus one credit usage row, all in one transaction.
    async fn admit(
        &self,
        admission: JobAdmission,
    ) -> Result<Vec<EnhancementJob>, EnhancementJobRepositoryError>;

    /// Newest first.
    async fn list_for_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<EnhancementJob>, EnhancementJobRepositoryError>;

    /// Idempotent: a completed job comes back unchanged.
    async fn complete(
        &self,
        owner: UserId,
        job_id: Uuid,
        result_url: &str,
    ) -> Result<EnhancementJob, EnhancementJobRepositoryError>;
}
