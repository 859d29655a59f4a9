use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::sea_orm_entity::plans::{
    ActiveModel as PlanActiveModel, Column as PlanColumn, Entity as PlanEntity,
};
use crate::modules::billing::application::domain::entities::Plan;
use crate::modules::billing::application::ports::outgoing::{
    NewPlan, PlanPatch, PlanRepository, PlanRepositoryError,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct PlanRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PlanRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn write_error(e: DbErr) -> PlanRepositoryError {
    if is_unique_violation(&e) {
        return PlanRepositoryError::NameTaken;
    }
    PlanRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PlanRepository for PlanRepositoryPostgres {
    async fn list_plans(&self) -> Result<Vec<Plan>, PlanRepositoryError> {
        let models = PlanEntity::find()
            .order_by_asc(PlanColumn::MonthlyPriceUsd)
            .all(&*self.db)
            .await
            .map_err(|e| PlanRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Plan::from).collect())
    }

    async fn find_plan(&self, plan_id: Uuid) -> Result<Option<Plan>, PlanRepositoryError> {
        let model = PlanEntity::find_by_id(plan_id)
            .one(&*self.db)
            .await
            .map_err(|e| PlanRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Plan::from))
    }

    async fn create_plan(&self, plan: NewPlan) -> Result<Plan, PlanRepositoryError> {
        let now = Utc::now().fixed_offset();

        let inserted = PlanActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(plan.name),
            description: Set(plan.description),
            monthly_price_usd: Set(plan.monthly_price_usd),
            max_ai_credits: Set(plan.max_ai_credits),
            max_storage_mb: Set(plan.max_storage_mb),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .map_err(write_error)?;

        Ok(Plan::from(inserted))
    }

    async fn update_plan(
        &self,
        plan_id: Uuid,
        patch: PlanPatch,
    ) -> Result<Plan, PlanRepositoryError> {
        let existing = PlanEntity::find_by_id(plan_id)
            .one(&*self.db)
            .await
            .map_err(|e| PlanRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(PlanRepositoryError::NotFound)?;

        let mut active = existing.into_active_model();

        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description.into_update() {
            active.description = Set(description);
        }
        if let Some(price) = patch.monthly_price_usd {
            active.monthly_price_usd = Set(price);
        }
        if let Some(credits) = patch.max_ai_credits {
            active.max_ai_credits = Set(credits);
        }
        if let Some(storage) = patch.max_storage_mb {
            active.max_storage_mb = Set(storage);
        }
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(write_error)?;
        debug!(plan_id = %plan_id, "Plan row updated");

        Ok(Plan::from(updated))
    }
}
