use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::enhancement::application::domain::entities::EnhancementJob;
use crate::modules::enhancement::application::ports::incoming::use_cases::{
    ListJobsError, ListJobsUseCase,
};
use crate::modules::enhancement::application::ports::outgoing::EnhancementJobRepository;
use crate::modules::project::application::ports::outgoing::ProjectQuery;

pub struct ListJobsService<Q, J>
where
    Q: ProjectQuery,
    J: EnhancementJobRepository,
{
    projects: Q,
    jobs: J,
}

impl<Q, J> ListJobsService<Q, J>
where
    Q: ProjectQuery,
    J: EnhancementJobRepository,
{
    pub fn new(projects: Q, jobs: J) -> Self {
        Self { projects, jobs }
    }
}

#[async_trait]
impl<Q, J> ListJobsUseCase for ListJobsService<Q, J>
where
    Q: ProjectQuery,
    J: EnhancementJobRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<Vec<EnhancementJob>, ListJobsError> {
        self.projects
            .find_project(owner, project_id)
            .await
            .map_err(|e| ListJobsError::RepositoryError(e.to_string()))?
            .ok_or(ListJobsError::ProjectNotFound)?;

        self.jobs
            .list_for_project(project_id)
            .await
            .map_err(|e| ListJobsError::RepositoryError(e.to_string()))
    }
}
