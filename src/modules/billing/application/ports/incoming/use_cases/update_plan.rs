use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::billing::application::domain::entities::Plan;
use crate::modules::billing::application::ports::outgoing::PlanPatch;

#[derive(Debug, Clone, PartialEq)]
pub enum UpdatePlanError {
    InvalidInput(String),
    PlanNotFound,
    NameTaken,
    RepositoryError(String),
}

impl fmt::Display for UpdatePlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdatePlanError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            UpdatePlanError::PlanNotFound => write!(f, "plan not found"),
            UpdatePlanError::NameTaken => write!(f, "plan name already exists"),
            UpdatePlanError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdatePlanUseCase: Send + Sync {
    /// Applies only the fields present in `patch`.
    async fn execute(&self, plan_id: Uuid, patch: PlanPatch) -> Result<Plan, UpdatePlanError>;
}
