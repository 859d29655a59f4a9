use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::listing::application::domain::entities::MarketplaceDetail;
use crate::modules::listing::application::ports::incoming::use_cases::{
    GetMarketplaceListingError, GetMarketplaceListingUseCase,
};
use crate::modules::listing::application::ports::outgoing::ListingQuery;

pub struct GetMarketplaceListingService<L>
where
    L: ListingQuery,
{
    query: L,
}

impl<L> GetMarketplaceListingService<L>
where
    L: ListingQuery,
{
    pub fn new(query: L) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<L> GetMarketplaceListingUseCase for GetMarketplaceListingService<L>
where
    L: ListingQuery,
{
    async fn execute(
        &self,
        listing_id: Uuid,
    ) -> Result<MarketplaceDetail, GetMarketplaceListingError> {
        self.query
            .find_published(listing_id)
            .await
            .map_err(|e| GetMarketplaceListingError::RepositoryError(e.to_string()))?
            .ok_or(GetMarketplaceListingError::ListingNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::UserId;
    use crate::modules::listing::application::domain::entities::ListingStatus;
    use crate::tests::support::listing_fakes::InMemoryListings;
    use crate::tests::support::project_fakes::InMemoryProjects;

    #[tokio::test]
    async fn test_published_detail_names_project() {
        let projects = InMemoryProjects::default();
        let owner = UserId::from(Uuid::new_v4());
        let project = projects.project_for(owner, "Seaside");
        let listings = InMemoryListings::new(projects);
        let listing = listings.seed(owner, project.id, "Seaside", ListingStatus::Published);

        let detail = GetMarketplaceListingService::new(listings)
            .execute(listing.id)
            .await
            .unwrap();

        assert_eq!(detail.listing.listing.id, listing.id);
        assert_eq!(detail.project.map(|p| p.name).as_deref(), Some("Seaside"));
    }

    #[tokio::test]
    async fn test_draft_is_hidden() {
        let listings = InMemoryListings::new(InMemoryProjects::default());
        let listing = listings.seed(
            UserId::from(Uuid::new_v4()),
            Uuid::new_v4(),
            "Draft",
            ListingStatus::Draft,
        );

        let result = GetMarketplaceListingService::new(listings)
            .execute(listing.id)
            .await;

        assert_eq!(result, Err(GetMarketplaceListingError::ListingNotFound));
    }
}
