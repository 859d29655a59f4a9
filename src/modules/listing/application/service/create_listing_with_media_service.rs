use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::listing::application::domain::entities::ListingWithMedia;
use crate::modules::listing::application::domain::listing_rules::check_fields;
use crate::modules::listing::application::domain::media_plan::{all_resolved, plan_media};
use crate::modules::listing::application::ports::incoming::use_cases::{
    CreateListingWithMediaCommand, CreateListingWithMediaError, CreateListingWithMediaUseCase,
};
use crate::modules::listing::application::ports::outgoing::{ListingRepository, NewListing};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

/// Creates a listing and its gallery in one step.
///
/// Every image version must come from the listing's project.
pub struct CreateListingWithMediaService<Q, R>
where
    Q: ProjectQuery,
    R: ListingRepository,
{
    projects: Q,
    repository: R,
}

impl<Q, R> CreateListingWithMediaService<Q, R>
where
    Q: ProjectQuery,
    R: ListingRepository,
{
    pub fn new(projects: Q, repository: R) -> Self {
        Self {
            projects,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> CreateListingWithMediaUseCase for CreateListingWithMediaService<Q, R>
where
    Q: ProjectQuery,
    R: ListingRepository,
{
    async fn execute(
        &self,
        command: CreateListingWithMediaCommand,
    ) -> Result<ListingWithMedia, CreateListingWithMediaError> {
        let fields =
            check_fields(command.fields).map_err(CreateListingWithMediaError::InvalidInput)?;
        let slots = plan_media(&command.image_version_ids, command.hero_image_version_id)
            .map_err(CreateListingWithMediaError::InvalidInput)?;

        self.projects
            .find_project(command.owner, command.project_id)
            .await
            .map_err(|e| CreateListingWithMediaError::RepositoryError(e.to_string()))?
            .ok_or(CreateListingWithMediaError::ProjectNotFound)?;

        let found = self
            .projects
            .version_ids_in_project(command.project_id, &command.image_version_ids)
            .await
            .map_err(|e| CreateListingWithMediaError::RepositoryError(e.to_string()))?;

        if !all_resolved(&slots, &found) {
            warn!(
                project_id = %command.project_id,
                requested = slots.len(),
                found = found.len(),
                "Listing media names versions outside the project"
            );
            return Err(CreateListingWithMediaError::InvalidImageVersions);
        }

        let created = self
            .repository
            .create_with_media(
                NewListing {
                    owner: command.owner,
                    project_id: command.project_id,
                    fields,
                },
                slots,
            )
            .await
            .map_err(|e| CreateListingWithMediaError::RepositoryError(e.to_string()))?;

        info!(
            listing_id = %created.listing.id,
            media = created.media.len(),
            "Listing created with media"
        );
        Ok(created)
    }
}
