use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone, PartialEq)]
pub enum ListProjectsError {
    QueryFailed(String),
}

impl fmt::Display for ListProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListProjectsError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<Project>, ListProjectsError>;
}
