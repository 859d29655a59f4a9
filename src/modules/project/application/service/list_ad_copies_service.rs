use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::AdCopy;
use crate::modules::project::application::ports::incoming::use_cases::{
    ListAdCopiesError, ListAdCopiesUseCase,
};
use crate::modules::project::application::ports::outgoing::{AdCopyRepository, ProjectQuery};

pub struct ListAdCopiesService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    query: Q,
    ad_copies: A,
}

impl<Q, A> ListAdCopiesService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    pub fn new(query: Q, ad_copies: A) -> Self {
        Self { query, ad_copies }
    }
}

#[async_trait]
impl<Q, A> ListAdCopiesUseCase for ListAdCopiesService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<Vec<AdCopy>, ListAdCopiesError> {
        self.query
            .find_project(owner, project_id)
            .await
            .map_err(|e| ListAdCopiesError::RepositoryError(e.to_string()))?
            .ok_or(ListAdCopiesError::ProjectNotFound)?;

        self.ad_copies
            .list_for_project(project_id)
            .await
            .map_err(|e| ListAdCopiesError::RepositoryError(e.to_string()))
    }
}
