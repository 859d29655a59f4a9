use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::ListingWithMedia;

#[derive(Debug, Clone, PartialEq)]
pub enum GetMyListingError {
    ListingNotFound,
    RepositoryError(String),
}

impl fmt::Display for GetMyListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetMyListingError::ListingNotFound => write!(f, "listing not found"),
            GetMyListingError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetMyListingUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        listing_id: Uuid,
    ) -> Result<ListingWithMedia, GetMyListingError>;
}
