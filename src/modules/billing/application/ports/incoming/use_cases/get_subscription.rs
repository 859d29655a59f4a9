use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::billing::application::domain::entities::SubscriptionWithPlan;

#[derive(Debug, Clone, PartialEq)]
pub enum GetSubscriptionError {
    RepositoryError(String),
}

impl fmt::Display for GetSubscriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSubscriptionError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetSubscriptionUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<Option<SubscriptionWithPlan>, GetSubscriptionError>;
}
