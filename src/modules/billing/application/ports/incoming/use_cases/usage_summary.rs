use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::billing::application::domain::entities::UsageSummary;

#[derive(Debug, Clone, PartialEq)]
pub enum UsageSummaryError {
    NoActiveSubscription,
    RepositoryError(String),
}

impl fmt::Display for UsageSummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageSummaryError::NoActiveSubscription => write!(f, "no active subscription"),
            UsageSummaryError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UsageSummaryUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UsageSummary, UsageSummaryError>;
}
