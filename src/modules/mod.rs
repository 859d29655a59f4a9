pub mod auth;
pub mod billing;
pub mod email;
pub mod enhancement;
pub mod listing;
pub mod project;
pub mod storage;
