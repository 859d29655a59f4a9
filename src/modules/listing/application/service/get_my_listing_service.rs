use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::ListingWithMedia;
use crate::modules::listing::application::ports::incoming::use_cases::{
    GetMyListingError, GetMyListingUseCase,
};
use crate::modules::listing::application::ports::outgoing::ListingQuery;

pub struct GetMyListingService<L>
where
    L: ListingQuery,
{
    query: L,
}

impl<L> GetMyListingService<L>
where
    L: ListingQuery,
{
    pub fn new(query: L) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<L> GetMyListingUseCase for GetMyListingService<L>
where
    L: ListingQuery,
{
    async fn execute(
        &self,
        owner: UserId,
        listing_id: Uuid,
    ) -> Result<ListingWithMedia, GetMyListingError> {
        self.query
            .find_for_owner(owner, listing_id)
            .await
            .map_err(|e| GetMyListingError::RepositoryError(e.to_string()))?
            .ok_or(GetMyListingError::ListingNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::listing::application::domain::entities::ListingStatus;
    use crate::tests::support::listing_fakes::InMemoryListings;
    use crate::tests::support::project_fakes::InMemoryProjects;

    #[tokio::test]
    async fn test_owner_sees_draft() {
        let listings = InMemoryListings::new(InMemoryProjects::default());
        let me = UserId::from(Uuid::new_v4());
        let listing = listings.seed(me, Uuid::new_v4(), "Loft", ListingStatus::Draft);

        let found = GetMyListingService::new(listings)
            .execute(me, listing.id)
            .await
            .unwrap();

        assert_eq!(found.listing.id, listing.id);
        assert!(found.media.is_empty());
    }

    #[tokio::test]
    async fn test_foreign_listing_is_not_found() {
        let listings = InMemoryListings::new(InMemoryProjects::default());
        let listing = listings.seed(
            UserId::from(Uuid::new_v4()),
            Uuid::new_v4(),
            "Loft",
            ListingStatus::Published,
        );

        let result = GetMyListingService::new(listings)
            .execute(UserId::from(Uuid::new_v4()), listing.id)
            .await;

        assert_eq!(result, Err(GetMyListingError::ListingNotFound));
    }
}
