use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::enhancement::application::domain::entities::EnhancementJob;
use crate::modules::enhancement::application::ports::incoming::use_cases::{
    CompleteJobError, CompleteJobUseCase,
};
use crate::modules::enhancement::application::ports::outgoing::{
    EnhancementJobRepository, EnhancementJobRepositoryError,
};

pub struct CompleteJobService<J>
where
    J: EnhancementJobRepository,
{
    jobs: J,
}

impl<J> CompleteJobService<J>
where
    J: EnhancementJobRepository,
{
    pub fn new(jobs: J) -> Self {
        Self { jobs }
    }
}

#[async_trait]
impl<J> CompleteJobUseCase for CompleteJobService<J>
where
    J: EnhancementJobRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        job_id: Uuid,
        enhanced_url: &str,
    ) -> Result<EnhancementJob, CompleteJobError> {
        let url = enhanced_url.trim();
        if url.is_empty() {
            return Err(CompleteJobError::InvalidInput(
                "enhancedUrl is required".to_string(),
            ));
        }

        let job = self
            .jobs
            .complete(owner, job_id, url)
            .await
            .map_err(|e| match e {
                EnhancementJobRepositoryError::JobNotFound => CompleteJobError::JobNotFound,
                other => CompleteJobError::RepositoryError(other.to_string()),
            })?;

        info!(
            job_id = %job.id,
            result_version_id = ?job.result_version_id,
            "Enhancement job completed"
        );
        Ok(job)
    }
}
