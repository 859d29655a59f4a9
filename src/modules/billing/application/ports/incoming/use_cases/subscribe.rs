use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::billing::application::domain::entities::SubscriptionWithPlan;

#[derive(Debug, Clone, PartialEq)]
pub enum SubscribeError {
    PlanNotFound,
    RepositoryError(String),
}

impl fmt::Display for SubscribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscribeError::PlanNotFound => write!(f, "plan not found"),
            SubscribeError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait SubscribeUseCase: Send + Sync {
    /// Replaces the user's active subscription, if any.
    async fn execute(
        &self,
        user_id: UserId,
        plan_id: Uuid,
    ) -> Result<SubscriptionWithPlan, SubscribeError>;
}
