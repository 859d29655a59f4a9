pub mod create_plan;
pub mod get_subscription;
pub mod list_plans;
pub mod subscribe;
pub mod update_plan;
pub mod usage_summary;

pub use create_plan::{CreatePlanError, CreatePlanUseCase};
pub use get_subscription::{GetSubscriptionError, GetSubscriptionUseCase};
pub use list_plans::{ListPlansError, ListPlansUseCase};
pub use subscribe::{SubscribeError, SubscribeUseCase};
pub use update_plan::{UpdatePlanError, UpdatePlanUseCase};
pub use usage_summary::{UsageSummaryError, UsageSummaryUseCase};
