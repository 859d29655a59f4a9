use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::ImageWithVersions;
use crate::modules::project::application::ports::incoming::use_cases::{
    ListImagesError, ListImagesUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

pub struct ListImagesService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> ListImagesService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListImagesUseCase for ListImagesService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<Vec<ImageWithVersions>, ListImagesError> {
        self.query
            .find_project(owner, project_id)
            .await
            .map_err(|e| ListImagesError::QueryFailed(e.to_string()))?
            .ok_or(ListImagesError::ProjectNotFound)?;

        self.query
            .list_images(project_id)
            .await
            .map_err(|e| ListImagesError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::project_fakes::InMemoryProjects;

    #[tokio::test]
    async fn test_newest_image_first() {
        let projects = InMemoryProjects::default();
        let me = UserId::from(Uuid::new_v4());
        let project = projects.project_for(me, "Villa");
        projects.image_in(project.id, "https://cdn/1.jpg");
        let newest = projects.image_in(project.id, "https://cdn/2.jpg");

        let images = ListImagesService::new(projects)
            .execute(me, project.id)
            .await
            .unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].image.id, newest.image.id);
    }

    #[tokio::test]
    async fn test_requires_ownership() {
        let projects = InMemoryProjects::default();
        let project = projects.project_for(UserId::from(Uuid::new_v4()), "Theirs");

        let result = ListImagesService::new(projects)
            .execute(UserId::from(Uuid::new_v4()), project.id)
            .await;

        assert_eq!(result, Err(ListImagesError::ProjectNotFound));
    }
}
