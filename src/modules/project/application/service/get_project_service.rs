use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::ProjectDetail;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectError, GetProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{AdCopyRepository, ProjectQuery};

pub struct GetProjectService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    query: Q,
    ad_copies: A,
}

impl<Q, A> GetProjectService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    pub fn new(query: Q, ad_copies: A) -> Self {
        Self { query, ad_copies }
    }
}

#[async_trait]
impl<Q, A> GetProjectUseCase for GetProjectService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<ProjectDetail, GetProjectError> {
        let project = self
            .query
            .find_project(owner, project_id)
            .await
            .map_err(|e| GetProjectError::QueryFailed(e.to_string()))?
            .ok_or(GetProjectError::ProjectNotFound)?;

        let ad_copies = self
            .ad_copies
            .list_for_project(project.id)
            .await
            .map_err(|e| GetProjectError::QueryFailed(e.to_string()))?;

        Ok(ProjectDetail { project, ad_copies })
    }
}
