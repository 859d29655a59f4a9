pub mod entities;
pub mod plan_rules;
