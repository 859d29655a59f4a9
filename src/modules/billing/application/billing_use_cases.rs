use std::sync::Arc;

use crate::modules::billing::application::ports::incoming::use_cases::{
    CreatePlanUseCase, GetSubscriptionUseCase, ListPlansUseCase, SubscribeUseCase,
    UpdatePlanUseCase, UsageSummaryUseCase,
};

#[derive(Clone)]
pub struct BillingUseCases {
    pub list_plans: Arc<dyn ListPlansUseCase + Send + Sync>,
    pub create_plan: Arc<dyn CreatePlanUseCase + Send + Sync>,
    pub update_plan: Arc<dyn UpdatePlanUseCase + Send + Sync>,
    pub get_subscription: Arc<dyn GetSubscriptionUseCase + Send + Sync>,
    pub subscribe: Arc<dyn SubscribeUseCase + Send + Sync>,
    pub usage_summary: Arc<dyn UsageSummaryUseCase + Send + Sync>,
}
