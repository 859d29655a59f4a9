use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::ImageWithVersions;
use crate::modules::project::application::domain::upload::{check_upload, UploadFile};
use crate::modules::project::application::ports::incoming::use_cases::{
    UploadImagesError, UploadImagesUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    NewImage, ProjectQuery, ProjectRepository,
};
use crate::modules::storage::application::ports::outgoing::{
    object_key, ObjectStorage, StorageError,
};

pub struct UploadImagesService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    query: Q,
    repository: R,
    storage: Arc<dyn ObjectStorage>,
}

impl<Q, R> UploadImagesService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    pub fn new(query: Q, repository: R, storage: Arc<dyn ObjectStorage>) -> Self {
        Self {
            query,
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<Q, R> UploadImagesUseCase for UploadImagesService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
        files: Vec<UploadFile>,
    ) -> Result<Vec<ImageWithVersions>, UploadImagesError> {
        if files.is_empty() {
            return Err(UploadImagesError::InvalidInput(
                "at least one file is required".to_string(),
            ));
        }
        // Reject the whole batch before anything is stored.
        for file in &files {
            check_upload(file).map_err(UploadImagesError::InvalidInput)?;
        }

        self.query
            .find_project(owner, project_id)
            .await
            .map_err(|e| UploadImagesError::RepositoryError(e.to_string()))?
            .ok_or(UploadImagesError::ProjectNotFound)?;

        let mut images = Vec::with_capacity(files.len());

        for file in files {
            let key = object_key(project_id, &file.file_name);
            let label = file.label.clone().or_else(|| Some(file.file_name.clone()));

            let url = self
                .storage
                .put(&key, file.bytes, &file.content_type)
                .await
                .map_err(|e| match e {
                    StorageError::NotConfigured => UploadImagesError::StorageNotConfigured,
                    StorageError::UploadFailed(msg) => {
                        warn!(project_id = %project_id, key = %key, "Upload failed: {}", msg);
                        UploadImagesError::StorageFailed(msg)
                    }
                })?;

            let image = self
                .repository
                .add_image(NewImage {
                    project_id,
                    original_url: url,
                    label,
                })
                .await
                .map_err(|e| UploadImagesError::RepositoryError(e.to_string()))?;

            images.push(image);
        }

        info!(project_id = %project_id, count = images.len(), "Images uploaded");
        Ok(images)
    }
}
