use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::Listing;
use crate::modules::listing::application::ports::outgoing::ListingPatch;

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateListingError {
    InvalidInput(String),
    ListingNotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateListingError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            UpdateListingError::ListingNotFound => write!(f, "listing not found"),
            UpdateListingError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateListingUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        listing_id: Uuid,
        patch: ListingPatch,
    ) -> Result<Listing, UpdateListingError>;
}
