use async_trait::async_trait;
use tracing::info;

use crate::modules::listing::application::domain::entities::Listing;
use crate::modules::listing::application::domain::listing_rules::check_fields;
use crate::modules::listing::application::ports::incoming::use_cases::{
    CreateListingCommand, CreateListingError, CreateListingUseCase,
};
use crate::modules::listing::application::ports::outgoing::{ListingRepository, NewListing};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

pub struct CreateListingService<Q, R>
where
    Q: ProjectQuery,
    R: ListingRepository,
{
    projects: Q,
    repository: R,
}

impl<Q, R> CreateListingService<Q, R>
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
impl<Q, R> CreateListingUseCase for CreateListingService<Q, R>
where
    Q: ProjectQuery,
    R: ListingRepository,
{
    async fn execute(&self, command: CreateListingCommand) -> Result<Listing, CreateListingError> {
        let fields = check_fields(command.fields).map_err(CreateListingError::InvalidInput)?;

        self.projects
            .find_project(command.owner, command.project_id)
            .await
            .map_err(|e| CreateListingError::RepositoryError(e.to_string()))?
            .ok_or(CreateListingError::ProjectNotFound)?;

        let listing = self
            .repository
            .create_listing(NewListing {
                owner: command.owner,
                project_id: command.project_id,
                fields,
            })
            .await
            .map_err(|e| CreateListingError::RepositoryError(e.to_string()))?;

        info!(listing_id = %listing.id, user_id = %command.owner, "Listing created");
        Ok(listing)
    }
}
