use async_trait::async_trait;
use std::fmt;

use crate::modules::listing::application::domain::entities::{
    ListingWithMedia, MarketplaceFilter,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ListMarketplaceError {
    InvalidInput(String),
    RepositoryError(String),
}

impl fmt::Display for ListMarketplaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListMarketplaceError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            ListMarketplaceError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListMarketplaceUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: MarketplaceFilter,
    ) -> Result<Vec<ListingWithMedia>, ListMarketplaceError>;
}
