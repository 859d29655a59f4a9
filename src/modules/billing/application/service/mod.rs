pub mod create_plan_service;
pub mod get_subscription_service;
pub mod list_plans_service;
pub mod subscribe_service;
pub mod update_plan_service;
pub mod usage_summary_service;

pub use create_plan_service::CreatePlanService;
pub use get_subscription_service::GetSubscriptionService;
pub use list_plans_service::ListPlansService;
pub use subscribe_service::SubscribeService;
pub use update_plan_service::UpdatePlanService;
pub use usage_summary_service::UsageSummaryService;
