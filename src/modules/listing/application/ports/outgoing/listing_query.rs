use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::{
    Listing, ListingWithMedia, MarketplaceDetail, MarketplaceFilter,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListingQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ListingQuery: Send + Sync {
    /// Newest first.
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Listing>, ListingQueryError>;

    async fn find_for_owner(
        &self,
        owner: UserId,
        listing_id: Uuid,
    ) -> Result<Option<ListingWithMedia>, ListingQueryError>;

    /// Published listings, newest first, each carrying only its hero media.
    async fn list_published(
        &self,
        filter: MarketplaceFilter,
    ) -> Result<Vec<ListingWithMedia>, ListingQueryError>;

    /// `None` when missing or unpublished.
    async fn find_published(
        &self,
        listing_id: Uuid,
    ) -> Result<Option<MarketplaceDetail>, ListingQueryError>;
}
