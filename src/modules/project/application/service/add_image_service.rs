use async_trait::async_trait;
use tracing::debug;

use crate::modules::project::application::domain::entities::ImageWithVersions;
use crate::modules::project::application::ports::incoming::use_cases::{
    AddImageCommand, AddImageError, AddImageUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    NewImage, ProjectQuery, ProjectRepository,
};

pub struct AddImageService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> AddImageService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> AddImageUseCase for AddImageService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    async fn execute(&self, command: AddImageCommand) -> Result<ImageWithVersions, AddImageError> {
        let url = command.original_url.trim().to_string();
        if url.is_empty() {
            return Err(AddImageError::InvalidInput(
                "originalUrl is required".to_string(),
            ));
        }

        self.query
            .find_project(command.owner, command.project_id)
            .await
            .map_err(|e| AddImageError::RepositoryError(e.to_string()))?
            .ok_or(AddImageError::ProjectNotFound)?;

        let image = self
            .repository
            .add_image(NewImage {
                project_id: command.project_id,
                original_url: url,
                label: command.label,
            })
            .await
            .map_err(|e| AddImageError::RepositoryError(e.to_string()))?;

        debug!(project_id = %command.project_id, image_id = %image.image.id, "Image added");
        Ok(image)
    }
}
