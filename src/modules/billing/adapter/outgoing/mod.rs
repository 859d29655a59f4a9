pub mod plan_repository_postgres;
pub mod sea_orm_entity;
pub mod subscription_repository_postgres;

pub use plan_repository_postgres::PlanRepositoryPostgres;
pub use subscription_repository_postgres::{sum_credits_used, SubscriptionRepositoryPostgres};
