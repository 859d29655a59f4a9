use async_trait::async_trait;
use std::fmt;

use crate::modules::billing::application::domain::entities::Plan;
use crate::modules::billing::application::ports::outgoing::NewPlan;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum CreatePlanError {
    InvalidInput(String),
    NameTaken,
    RepositoryError(String),
}

impl fmt::Display for CreatePlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatePlanError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            CreatePlanError::NameTaken => write!(f, "plan name already exists"),
            CreatePlanError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreatePlanUseCase: Send + Sync {
    async fn execute(&self, plan: NewPlan) -> Result<Plan, CreatePlanError>;
}
