use async_trait::async_trait;
use tracing::debug;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::billing::application::domain::entities::UsageSummary;
use crate::modules::billing::application::ports::incoming::use_cases::{
    UsageSummaryError, UsageSummaryUseCase,
};
use crate::modules::billing::application::ports::outgoing::SubscriptionRepository;

pub struct UsageSummaryService<S>
where
    S: SubscriptionRepository,
{
    subscriptions: S,
}

impl<S> UsageSummaryService<S>
where
    S: SubscriptionRepository,
{
    pub fn new(subscriptions: S) -> Self {
        Self { subscriptions }
    }
}

#[async_trait]
impl<S> UsageSummaryUseCase for UsageSummaryService<S>
where
    S: SubscriptionRepository,
{
    async fn execute(&self, user_id: UserId) -> Result<UsageSummary, UsageSummaryError> {
        let active = self
            .subscriptions
            .find_active(user_id)
            .await
            .map_err(|e| UsageSummaryError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                debug!(user_id = %user_id, "Usage requested without a subscription");
                UsageSummaryError::NoActiveSubscription
            })?;

        let used = self
            .subscriptions
            .used_credits(active.subscription.id)
            .await
            .map_err(|e| UsageSummaryError::RepositoryError(e.to_string()))?;

        Ok(UsageSummary::new(active.subscription.id, active.plan, used))
    }
}
