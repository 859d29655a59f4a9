use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::listing::application::domain::entities::ListingWithMedia;
use crate::modules::listing::application::domain::media_plan::{all_resolved, plan_media};
use crate::modules::listing::application::ports::incoming::use_cases::{
    AttachMediaCommand, AttachMediaError, AttachMediaUseCase,
};
use crate::modules::listing::application::ports::outgoing::{ListingQuery, ListingRepository};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

/// Replaces a listing's gallery with versions from its own project.
pub struct AttachMediaService<Q, L, R>
where
    Q: ProjectQuery,
    L: ListingQuery,
    R: ListingRepository,
{
    projects: Q,
    listings: L,
    repository: R,
}

impl<Q, L, R> AttachMediaService<Q, L, R>
where
    Q: ProjectQuery,
    L: ListingQuery,
    R: ListingRepository,
{
    pub fn new(projects: Q, listings: L, repository: R) -> Self {
        Self {
            projects,
            listings,
            repository,
        }
    }
}

#[async_trait]
impl<Q, L, R> AttachMediaUseCase for AttachMediaService<Q, L, R>
where
    Q: ProjectQuery,
    L: ListingQuery,
    R: ListingRepository,
{
    async fn execute(
        &self,
        command: AttachMediaCommand,
    ) -> Result<ListingWithMedia, AttachMediaError> {
        let slots = plan_media(&command.image_version_ids, command.hero_image_version_id)
            .map_err(AttachMediaError::InvalidInput)?;

        let current = self
            .listings
            .find_for_owner(command.owner, command.listing_id)
            .await
            .map_err(|e| AttachMediaError::RepositoryError(e.to_string()))?
            .ok_or(AttachMediaError::ListingNotFound)?;
        let listing = current.listing;

        let found = self
            .projects
            .version_ids_in_project(listing.project_id, &command.image_version_ids)
            .await
            .map_err(|e| AttachMediaError::RepositoryError(e.to_string()))?;

        if !all_resolved(&slots, &found) {
            warn!(
                listing_id = %listing.id,
                requested = slots.len(),
                found = found.len(),
                "Listing media names versions outside the project"
            );
            return Err(AttachMediaError::InvalidImageVersions);
        }

        let media = self
            .repository
            .replace_media(listing.id, slots)
            .await
            .map_err(|e| AttachMediaError::RepositoryError(e.to_string()))?;

        info!(listing_id = %listing.id, media = media.len(), "Listing gallery replaced");
        Ok(ListingWithMedia { listing, media })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::UserId;
    use crate::modules::listing::application::domain::entities::ListingStatus;
    use crate::tests::support::listing_fakes::InMemoryListings;
    use crate::tests::support::project_fakes::InMemoryProjects;
    use uuid::Uuid;

    struct Fixture {
        projects: InMemoryProjects,
        listings: InMemoryListings,
        owner: UserId,
        listing_id: Uuid,
        versions: Vec<Uuid>,
    }

    impl Fixture {
        fn new() -> Self {
            let projects = InMemoryProjects::default();
            let owner = UserId::from(Uuid::new_v4());
            let project = projects.project_for(owner, "Cottage");
            let versions = (0..3)
                .map(|n| {
                    projects
                        .image_in(project.id, &format!("https://cdn/{}.jpg", n))
                        .versions[0]
                        .id
                })
                .collect();
            let listings = InMemoryListings::new(projects.clone());
            let listing = listings.seed(owner, project.id, "Cottage", ListingStatus::Draft);
            Self {
                projects,
                listings,
                owner,
                listing_id: listing.id,
                versions,
            }
        }

        async fn attach(
            &self,
            ids: Vec<Uuid>,
            hero: Option<Uuid>,
        ) -> Result<ListingWithMedia, AttachMediaError> {
            AttachMediaService::new(
                self.projects.clone(),
                self.listings.clone(),
                self.listings.clone(),
            )
            .execute(AttachMediaCommand {
                owner: self.owner,
                listing_id: self.listing_id,
                image_version_ids: ids,
                hero_image_version_id: hero,
            })
            .await
        }
    }

    #[tokio::test]
    async fn test_second_attach_replaces_gallery() {
        let f = Fixture::new();

        f.attach(vec![f.versions[0], f.versions[1]], None).await.unwrap();
        let result = f.attach(vec![f.versions[2]], None).await.unwrap();

        let stored = f.listings.media_of(f.listing_id);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].image_version_id, f.versions[2]);
        assert!(stored[0].is_hero);
        assert_eq!(result.media, stored);
    }

    #[tokio::test]
    async fn test_version_from_other_project() {
        let f = Fixture::new();
        let other = Fixture::new();

        let result = f.attach(vec![other.versions[0]], None).await;

        assert_eq!(result, Err(AttachMediaError::InvalidImageVersions));
        assert!(f.listings.media_of(f.listing_id).is_empty());
    }

    #[tokio::test]
    async fn test_unknown_listing() {
        let f = Fixture::new();
        let service = AttachMediaService::new(
            f.projects.clone(),
            f.listings.clone(),
            f.listings.clone(),
        );

        let result = service
            .execute(AttachMediaCommand {
                owner: UserId::from(Uuid::new_v4()),
                listing_id: f.listing_id,
                image_version_ids: vec![f.versions[0]],
                hero_image_version_id: None,
            })
            .await;

        assert_eq!(result, Err(AttachMediaError::ListingNotFound));
    }

    #[tokio::test]
    async fn test_duplicate_versions() {
        let f = Fixture::new();

        let result = f.attach(vec![f.versions[0], f.versions[0]], None).await;

        assert!(matches!(result, Err(AttachMediaError::InvalidInput(_))));
    }
}
