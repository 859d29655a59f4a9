use async_trait::async_trait;
use tracing::info;

use crate::modules::billing::application::domain::entities::Plan;
use crate::modules::billing::application::domain::plan_rules::{
    check_name, check_non_negative, check_price,
};
use crate::modules::billing::application::ports::incoming::use_cases::{
    CreatePlanError, CreatePlanUseCase,
};
use crate::modules::billing::application::ports::outgoing::{
    NewPlan, PlanRepository, PlanRepositoryError,
};

pub struct CreatePlanService<R>
where
    R: PlanRepository,
{
    plan_repository: R,
}

impl<R> CreatePlanService<R>
where
    R: PlanRepository,
{
    pub fn new(plan_repository: R) -> Self {
        Self { plan_repository }
    }
}

fn validate(plan: &NewPlan) -> Result<(), String> {
    check_name(&plan.name)?;
    check_price(plan.monthly_price_usd)?;
    check_non_negative("maxAiCredits", plan.max_ai_credits)?;
    check_non_negative("maxStorageMb", plan.max_storage_mb)
}

#[async_trait]
impl<R> CreatePlanUseCase for CreatePlanService<R>
where
    R: PlanRepository,
{
    async fn execute(&self, mut plan: NewPlan) -> Result<Plan, CreatePlanError> {
        validate(&plan).map_err(CreatePlanError::InvalidInput)?;
        plan.name = plan.name.trim().to_string();

        let created = self
            .plan_repository
            .create_plan(plan)
            .await
            .map_err(|e| match e {
                PlanRepositoryError::NameTaken => CreatePlanError::NameTaken,
                other => CreatePlanError::RepositoryError(other.to_string()),
            })?;

        info!(plan_id = %created.id, name = %created.name, "Plan created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::billing_fakes::{sample_plan, InMemoryPlans};

    fn new_plan(name: &str) -> NewPlan {
        NewPlan {
            name: name.to_string(),
            description: Some("For growing teams".to_string()),
            monthly_price_usd: 49.0,
            max_ai_credits: 500,
            max_storage_mb: 10_000,
        }
    }

    #[tokio::test]
    async fn test_creates_plan_with_trimmed_name() {
        let plans = InMemoryPlans::default();

        let created = CreatePlanService::new(plans.clone())
            .execute(new_plan("  Pro  "))
            .await
            .unwrap();

        assert_eq!(created.name, "Pro");
        assert_eq!(plans.get(created.id).unwrap().max_ai_credits, 500);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_conflict() {
        let plans = InMemoryPlans::with_plans(vec![sample_plan("Pro", 49.0, 500)]);

        let result = CreatePlanService::new(plans).execute(new_plan("Pro")).await;

        assert_eq!(result, Err(CreatePlanError::NameTaken));
    }

    #[tokio::test]
    async fn test_negative_credits_rejected() {
        let mut plan = new_plan("Broken");
        plan.max_ai_credits = -1;

        let result = CreatePlanService::new(InMemoryPlans::default())
            .execute(plan)
            .await;

        assert!(matches!(result, Err(CreatePlanError::InvalidInput(_))));
    }
}
