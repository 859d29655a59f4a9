use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::{UserId, UserProfile};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchProfileError {
    UserNotFound,
    RepositoryError(String),
}

impl fmt::Display for FetchProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchProfileError::UserNotFound => write!(f, "user not found"),
            FetchProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError>;
}
