pub mod entities;
pub mod listing_rules;
pub mod media_plan;
