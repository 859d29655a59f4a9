pub mod credit_usages;
pub mod plans;
pub mod subscriptions;
