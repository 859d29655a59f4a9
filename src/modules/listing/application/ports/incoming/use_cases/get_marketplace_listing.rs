use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::listing::application::domain::entities::MarketplaceDetail;

#[derive(Debug, Clone, PartialEq)]
pub enum GetMarketplaceListingError {
    ListingNotFound,
    RepositoryError(String),
}

impl fmt::Display for GetMarketplaceListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetMarketplaceListingError::ListingNotFound => write!(f, "listing not found"),
            GetMarketplaceListingError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait GetMarketplaceListingUseCase: Send + Sync {
    async fn execute(
        &self,
        listing_id: Uuid,
    ) -> Result<MarketplaceDetail, GetMarketplaceListingError>;
}
