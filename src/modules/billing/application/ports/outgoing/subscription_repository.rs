use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::billing::application::domain::entities::{Subscription, SubscriptionWithPlan};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscriptionRepositoryError {
    #[error("Plan not found")]
    PlanNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn find_active(
        &self,
        user_id: UserId,
    ) -> Result<Option<SubscriptionWithPlan>, SubscriptionRepositoryError>;

    /// Ends the current active subscription (if any) and starts a new one, atomically.
    async fn activate(
        &self,
        user_id: UserId,
        plan_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Subscription, SubscriptionRepositoryError>;

    /// SUM of the credit ledger for one subscription.
    async fn used_credits(&self, subscription_id: Uuid) -> Result<i64, SubscriptionRepositoryError>;
}
