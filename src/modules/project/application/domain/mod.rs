pub mod ad_copy_rules;
pub mod entities;
pub mod upload;
