pub mod plan_repository;
pub mod subscription_repository;

pub use plan_repository::{NewPlan, PlanPatch, PlanRepository, PlanRepositoryError};
pub use subscription_repository::{SubscriptionRepository, SubscriptionRepositoryError};
