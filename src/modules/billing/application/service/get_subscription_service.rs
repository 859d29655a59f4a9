use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::billing::application::domain::entities::SubscriptionWithPlan;
use crate::modules::billing::application::ports::incoming::use_cases::{
    GetSubscriptionError, GetSubscriptionUseCase,
};
use crate::modules::billing::application::ports::outgoing::SubscriptionRepository;

pub struct GetSubscriptionService<S>
where
    S: SubscriptionRepository,
{
    subscriptions: S,
}

impl<S> GetSubscriptionService<S>
where
    S: SubscriptionRepository,
{
    pub fn new(subscriptions: S) -> Self {
        Self { subscriptions }
    }
}

#[async_trait]
impl<S> GetSubscriptionUseCase for GetSubscriptionService<S>
where
    S: SubscriptionRepository,
{
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<Option<SubscriptionWithPlan>, GetSubscriptionError> {
        self.subscriptions
            .find_active(user_id)
            .await
            .map_err(|e| GetSubscriptionError::RepositoryError(e.to_string()))
    }
}
