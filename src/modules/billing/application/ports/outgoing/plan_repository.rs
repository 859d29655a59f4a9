use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::billing::application::domain::entities::Plan;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlan {
    pub name: String,
    pub description: Option<String>,
    pub monthly_price_usd: f64,
    pub max_ai_credits: i32,
    pub max_storage_mb: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanPatch {
    pub name: Option<String>,
    pub description: PatchField<String>,
    pub monthly_price_usd: Option<f64>,
    pub max_ai_credits: Option<i32>,
    pub max_storage_mb: Option<i32>,
}

impl PlanPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_unset()
            && self.monthly_price_usd.is_none()
            && self.max_ai_credits.is_none()
            && self.max_storage_mb.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanRepositoryError {
    #[error("Plan not found")]
    NotFound,

    #[error("Plan name already exists")]
    NameTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Cheapest first.
    async fn list_plans(&self) -> Result<Vec<Plan>, PlanRepositoryError>;
    async fn find_plan(&self, plan_id: Uuid) -> Result<Option<Plan>, PlanRepositoryError>;
    async fn create_plan(&self, plan: NewPlan) -> Result<Plan, PlanRepositoryError>;
    async fn update_plan(&self, plan_id: Uuid, patch: PlanPatch)
        -> Result<Plan, PlanRepositoryError>;
}
