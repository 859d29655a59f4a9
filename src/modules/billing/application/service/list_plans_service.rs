use async_trait::async_trait;

use crate::modules::billing::application::domain::entities::Plan;
use crate::modules::billing::application::ports::incoming::use_cases::{
    ListPlansError, ListPlansUseCase,
};
use crate::modules::billing::application::ports::outgoing::PlanRepository;

pub struct ListPlansService<R>
where
    R: PlanRepository,
{
    plan_repository: R,
}

impl<R> ListPlansService<R>
where
    R: PlanRepository,
{
    pub fn new(plan_repository: R) -> Self {
        Self { plan_repository }
    }
}

#[async_trait]
impl<R> ListPlansUseCase for ListPlansService<R>
where
    R: PlanRepository,
{
    async fn execute(&self) -> Result<Vec<Plan>, ListPlansError> {
        self.plan_repository
            .list_plans()
            .await
            .map_err(|e| ListPlansError::RepositoryError(e.to_string()))
    }
}
