use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::Listing;

#[derive(Debug, Clone, PartialEq)]
pub enum ListMyListingsError {
    RepositoryError(String),
}

impl fmt::Display for ListMyListingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListMyListingsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListMyListingsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<Listing>, ListMyListingsError>;
}
