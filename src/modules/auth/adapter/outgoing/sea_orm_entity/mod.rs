pub mod single_use_tokens;
pub mod user_roles;
pub mod users;
