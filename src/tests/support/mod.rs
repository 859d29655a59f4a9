pub mod app_state_builder;
pub mod auth_fakes;
pub mod auth_helper;
pub mod billing_fakes;
pub mod db;
pub mod enhancement_fakes;
pub mod listing_fakes;
pub mod project_fakes;
pub mod stubs;
