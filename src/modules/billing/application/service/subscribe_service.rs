use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::billing::application::domain::entities::SubscriptionWithPlan;
use crate::modules::billing::application::ports::incoming::use_cases::{
    SubscribeError, SubscribeUseCase,
};
use crate::modules::billing::application::ports::outgoing::{
    PlanRepository, SubscriptionRepository, SubscriptionRepositoryError,
};

pub struct SubscribeService<P, S>
where
    P: PlanRepository,
    S: SubscriptionRepository,
{
    plans: P,
    subscriptions: S,
}

impl<P, S> SubscribeService<P, S>
where
    P: PlanRepository,
    S: SubscriptionRepository,
{
    pub fn new(plans: P, subscriptions: S) -> Self {
        Self {
            plans,
            subscriptions,
        }
    }
}

#[async_trait]
impl<P, S> SubscribeUseCase for SubscribeService<P, S>
where
    P: PlanRepository,
    S: SubscriptionRepository,
{
    async fn execute(
        &self,
        user_id: UserId,
        plan_id: Uuid,
    ) -> Result<SubscriptionWithPlan, SubscribeError> {
        let plan = self
            .plans
            .find_plan(plan_id)
            .await
            .map_err(|e| SubscribeError::RepositoryError(e.to_string()))?
            .ok_or(SubscribeError::PlanNotFound)?;

        let subscription = self
            .subscriptions
            .activate(user_id, plan_id, Utc::now())
            .await
            .map_err(|e| match e {
                SubscriptionRepositoryError::PlanNotFound => SubscribeError::PlanNotFound,
                other => SubscribeError::RepositoryError(other.to_string()),
            })?;

        info!(
            user_id = %user_id,
            plan_id = %plan_id,
            subscription_id = %subscription.id,
            "Subscription activated"
        );

        Ok(SubscriptionWithPlan { subscription, plan })
    }
}
