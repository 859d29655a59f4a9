use async_trait::async_trait;
use std::fmt;

use crate::modules::billing::application::domain::entities::Plan;

#[derive(Debug, Clone, PartialEq)]
pub enum ListPlansError {
    RepositoryError(String),
}

impl fmt::Display for ListPlansError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListPlansError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListPlansUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Plan>, ListPlansError>;
}
