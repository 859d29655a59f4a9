use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteAdCopyError, DeleteAdCopyUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    AdCopyRepository, AdCopyRepositoryError, ProjectQuery,
};

pub struct DeleteAdCopyService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    query: Q,
    ad_copies: A,
}

impl<Q, A> DeleteAdCopyService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    pub fn new(query: Q, ad_copies: A) -> Self {
        Self { query, ad_copies }
    }
}

#[async_trait]
impl<Q, A> DeleteAdCopyUseCase for DeleteAdCopyService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
        ad_copy_id: Uuid,
    ) -> Result<(), DeleteAdCopyError> {
        self.query
            .find_project(owner, project_id)
            .await
            .map_err(|e| DeleteAdCopyError::RepositoryError(e.to_string()))?
            .ok_or(DeleteAdCopyError::AdCopyNotFound)?;

        self.ad_copies
            .delete(project_id, ad_copy_id)
            .await
            .map_err(|e| match e {
                AdCopyRepositoryError::NotFound => DeleteAdCopyError::AdCopyNotFound,
                other => DeleteAdCopyError::RepositoryError(other.to_string()),
            })?;

        info!(project_id = %project_id, ad_copy_id = %ad_copy_id, "Ad copy deleted");
        Ok(())
    }
}
