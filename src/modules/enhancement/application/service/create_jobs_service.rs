use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::enhancement::application::domain::admission::{check_image_ids, same_id_set};
use crate::modules::enhancement::application::domain::entities::EnhancementJob;
use crate::modules::enhancement::application::ports::incoming::use_cases::{
    CreateJobsCommand, CreateJobsError, CreateJobsUseCase,
};
use crate::modules::enhancement::application::ports::outgoing::{
    EnhancementJobRepository, EnhancementJobRepositoryError, JobAdmission,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Admission control for enhancement batches.
///
/// Ownership and image checks run first, outside the transaction. Credit
/// metering happens in [`EnhancementJobRepository::admit`] under a row lock on
/// the active subscription, so concurrent batches cannot overdraw.
pub struct CreateJobsService<Q, J>
where
    Q: ProjectQuery,
    J: EnhancementJobRepository,
{
    projects: Q,
    jobs: J,
}

impl<Q, J> CreateJobsService<Q, J>
where
    Q: ProjectQuery,
    J: EnhancementJobRepository,
{
    pub fn new(projects: Q, jobs: J) -> Self {
        Self { projects, jobs }
    }
}

#[async_trait]
impl<Q, J> CreateJobsUseCase for CreateJobsService<Q, J>
where
    Q: ProjectQuery,
    J: EnhancementJobRepository,
{
    async fn execute(
        &self,
        command: CreateJobsCommand,
    ) -> Result<Vec<EnhancementJob>, CreateJobsError> {
        check_image_ids(&command.image_ids).map_err(CreateJobsError::InvalidInput)?;

        self.projects
            .find_project(command.owner, command.project_id)
            .await
            .map_err(|e| CreateJobsError::RepositoryError(e.to_string()))?
            .ok_or(CreateJobsError::ProjectNotFound)?;

        let found = self
            .projects
            .image_ids_in_project(command.project_id, &command.image_ids)
            .await
            .map_err(|e| CreateJobsError::RepositoryError(e.to_string()))?;

        if !same_id_set(&command.image_ids, &found) {
            warn!(
                project_id = %command.project_id,
                requested = command.image_ids.len(),
                found = found.len(),
                "Enhancement batch names images outside the project"
            );
            return Err(CreateJobsError::InvalidImages);
        }

        let jobs = self
            .jobs
            .admit(JobAdmission {
                owner: command.owner,
                project_id: command.project_id,
                image_ids: command.image_ids,
            })
            .await
            .map_err(|e| match e {
                EnhancementJobRepositoryError::NoActiveSubscription => {
                    CreateJobsError::NoActiveSubscription
                }
                EnhancementJobRepositoryError::InsufficientCredits {
                    required,
                    remaining,
                } => CreateJobsError::InsufficientCredits {
                    required,
                    remaining,
                },
                other => CreateJobsError::RepositoryError(other.to_string()),
            })?;

        info!(
            user_id = %command.owner,
            project_id = %command.project_id,
            jobs = jobs.len(),
            "Enhancement jobs admitted"
        );
        Ok(jobs)
    }
}
