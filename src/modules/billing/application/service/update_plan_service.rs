use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::billing::application::domain::entities::Plan;
use crate::modules::billing::application::domain::plan_rules::{
    check_name, check_non_negative, check_price,
};
use crate::modules::billing::application::ports::incoming::use_cases::{
    UpdatePlanError, UpdatePlanUseCase,
};
use crate::modules::billing::application::ports::outgoing::{
    PlanPatch, PlanRepository, PlanRepositoryError,
};

pub struct UpdatePlanService<R>
where
    R: PlanRepository,
{
    plan_repository: R,
}

impl<R> UpdatePlanService<R>
where
    R: PlanRepository,
{
    pub fn new(plan_repository: R) -> Self {
        Self { plan_repository }
    }
}

fn validate(patch: &PlanPatch) -> Result<(), String> {
    if let Some(name) = &patch.name {
        check_name(name)?;
    }
    if let Some(price) = patch.monthly_price_usd {
        check_price(price)?;
    }
    if let Some(credits) = patch.max_ai_credits {
        check_non_negative("maxAiCredits", credits)?;
    }
    if let Some(storage) = patch.max_storage_mb {
        check_non_negative("maxStorageMb", storage)?;
    }
    Ok(())
}

#[async_trait]
impl<R> UpdatePlanUseCase for UpdatePlanService<R>
where
    R: PlanRepository,
{
    async fn execute(&self, plan_id: Uuid, mut patch: PlanPatch) -> Result<Plan, UpdatePlanError> {
        validate(&patch).map_err(UpdatePlanError::InvalidInput)?;
        patch.name = patch.name.map(|n| n.trim().to_string());

        // Nothing to write; still 404 for an unknown id.
        if patch.is_empty() {
            return self
                .plan_repository
                .find_plan(plan_id)
                .await
                .map_err(|e| UpdatePlanError::RepositoryError(e.to_string()))?
                .ok_or(UpdatePlanError::PlanNotFound);
        }

        let plan = self
            .plan_repository
            .update_plan(plan_id, patch)
            .await
            .map_err(|e| match e {
                PlanRepositoryError::NotFound => UpdatePlanError::PlanNotFound,
                PlanRepositoryError::NameTaken => UpdatePlanError::NameTaken,
                other => UpdatePlanError::RepositoryError(other.to_string()),
            })?;

        info!(plan_id = %plan.id, "Plan updated");
        Ok(plan)
    }
}
