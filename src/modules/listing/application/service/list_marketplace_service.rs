use async_trait::async_trait;

use crate::modules::listing::application::domain::entities::{
    ListingWithMedia, MarketplaceFilter,
};
use crate::modules::listing::application::domain::listing_rules::check_filter;
use crate::modules::listing::application::ports::incoming::use_cases::{
    ListMarketplaceError, ListMarketplaceUseCase,
};
use crate::modules::listing::application::ports::outgoing::ListingQuery;

pub struct ListMarketplaceService<L>
where
    L: ListingQuery,
{
    query: L,
}

impl<L> ListMarketplaceService<L>
where
    L: ListingQuery,
{
    pub fn new(query: L) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<L> ListMarketplaceUseCase for ListMarketplaceService<L>
where
    L: ListingQuery,
{
    async fn execute(
        &self,
        mut filter: MarketplaceFilter,
    ) -> Result<Vec<ListingWithMedia>, ListMarketplaceError> {
        check_filter(&filter).map_err(ListMarketplaceError::InvalidInput)?;

        let blank_to_none =
            |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        filter.city = blank_to_none(filter.city);
        filter.country = blank_to_none(filter.country);

        self.query
            .list_published(filter)
            .await
            .map_err(|e| ListMarketplaceError::RepositoryError(e.to_string()))
    }
}
