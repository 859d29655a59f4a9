use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::Listing;
use crate::modules::listing::application::ports::incoming::use_cases::{
    ListMyListingsError, ListMyListingsUseCase,
};
use crate::modules::listing::application::ports::outgoing::ListingQuery;

pub struct ListMyListingsService<L>
where
    L: ListingQuery,
{
    query: L,
}

impl<L> ListMyListingsService<L>
where
    L: ListingQuery,
{
    pub fn new(query: L) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<L> ListMyListingsUseCase for ListMyListingsService<L>
where
    L: ListingQuery,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<Listing>, ListMyListingsError> {
        self.query
            .list_for_owner(owner)
            .await
            .map_err(|e| ListMyListingsError::RepositoryError(e.to_string()))
    }
}
