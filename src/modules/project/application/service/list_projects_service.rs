use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    ListProjectsError, ListProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

pub struct ListProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> ListProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListProjectsUseCase for ListProjectsService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<Project>, ListProjectsError> {
        self.query
            .list_projects(owner)
            .await
            .map_err(|e| ListProjectsError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::project_fakes::InMemoryProjects;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_only_own_projects() {
        let projects = InMemoryProjects::default();
        let me = UserId::from(Uuid::new_v4());
        projects.project_for(me, "Mine");
        projects.project_for(UserId::from(Uuid::new_v4()), "Theirs");

        let listed = ListProjectsService::new(projects).execute(me).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Mine");
    }
}
