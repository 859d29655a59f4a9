use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use super::sea_orm_entity::enhancement_jobs::{
    ActiveModel as JobActiveModel, Column as JobColumn, Entity as JobEntity, Model as JobModel,
};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::billing::adapter::outgoing::sea_orm_entity::credit_usages::{
    ActiveModel as CreditUsageActiveModel, Entity as CreditUsageEntity,
};
use crate::modules::billing::adapter::outgoing::sea_orm_entity::plans::Entity as PlanEntity;
use crate::modules::billing::adapter::outgoing::sea_orm_entity::subscriptions::{
    Column as SubscriptionColumn, Entity as SubscriptionEntity,
};
use crate::modules::billing::adapter::outgoing::sum_credits_used;
use crate::modules::billing::application::domain::entities::{
    remaining_credits, ENHANCEMENT_JOB_REASON,
};
use crate::modules::enhancement::application::domain::admission::credits_required;
use crate::modules::enhancement::application::domain::entities::{EnhancementJob, JobStatus};
use crate::modules::enhancement::application::ports::outgoing::{
    EnhancementJobRepository, EnhancementJobRepositoryError, JobAdmission,
};
use crate::modules::project::adapter::outgoing::insert_version;
use crate::modules::project::application::domain::entities::VersionType;

#[derive(Clone, Debug)]
pub struct EnhancementJobRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EnhancementJobRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> EnhancementJobRepositoryError {
    EnhancementJobRepositoryError::DatabaseError(e.to_string())
}

fn to_job(model: JobModel) -> Result<EnhancementJob, EnhancementJobRepositoryError> {
    EnhancementJob::try_from(model).map_err(EnhancementJobRepositoryError::DatabaseError)
}

fn to_active_model(job: &EnhancementJob) -> JobActiveModel {
    JobActiveModel {
        id: Set(job.id),
        user_id: Set(job.user_id.value()),
        project_id: Set(job.project_id),
        image_id: Set(job.image_id),
        status: Set(job.status.as_str().to_string()),
        result_version_id: Set(job.result_version_id),
        created_at: Set(job.created_at.fixed_offset()),
        updated_at: Set(job.updated_at.fixed_offset()),
    }
}

#[async_trait]
impl EnhancementJobRepository for EnhancementJobRepositoryPostgres {
    async fn admit(
        &self,
        admission: JobAdmission,
    ) -> Result<Vec<EnhancementJob>, EnhancementJobRepositoryError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        // SELECT ... FOR UPDATE: concurrent admissions for this user queue here.
        let subscription = SubscriptionEntity::find()
            .filter(SubscriptionColumn::UserId.eq(admission.owner.value()))
            .filter(SubscriptionColumn::IsActive.eq(true))
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or(EnhancementJobRepositoryError::NoActiveSubscription)?;

        let plan = PlanEntity::find_by_id(subscription.plan_id)
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or_else(|| {
                EnhancementJobRepositoryError::DatabaseError(format!(
                    "subscription {} references missing plan {}",
                    subscription.id, subscription.plan_id
                ))
            })?;

        let used = sum_credits_used(&txn, subscription.id)
            .await
            .map_err(db_error)?;
        let required = credits_required(admission.image_ids.len());
        let remaining = remaining_credits(plan.max_ai_credits, used);

        if remaining < required {
            txn.rollback().await.map_err(db_error)?;
            info!(
                user_id = %admission.owner,
                required,
                remaining,
                "Enhancement batch refused for lack of credits"
            );
            return Err(EnhancementJobRepositoryError::InsufficientCredits {
                required,
                remaining,
            });
        }

        let now = Utc::now();
        let jobs: Vec<EnhancementJob> = admission
            .image_ids
            .iter()
            .map(|image_id| {
                EnhancementJob::pending(admission.owner, admission.project_id, *image_id, now)
            })
            .collect();

        JobEntity::insert_many(jobs.iter().map(to_active_model))
            .exec_without_returning(&txn)
            .await
            .map_err(db_error)?;

        let credits_used = i32::try_from(required).map_err(|_| {
            EnhancementJobRepositoryError::DatabaseError(format!(
                "batch of {} credits overflows the ledger column",
                required
            ))
        })?;

        CreditUsageEntity::insert(CreditUsageActiveModel {
            id: Set(Uuid::new_v4()),
            subscription_id: Set(subscription.id),
            credits_used: Set(credits_used),
            reason: Set(ENHANCEMENT_JOB_REASON.to_string()),
            created_at: Set(now.fixed_offset()),
        })
        .exec_without_returning(&txn)
        .await
        .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;
        debug!(subscription_id = %subscription.id, credits = required, "Credits drawn");

        Ok(jobs)
    }

    async fn list_for_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<EnhancementJob>, EnhancementJobRepositoryError> {
        let models = JobEntity::find()
            .filter(JobColumn::ProjectId.eq(project_id))
            .order_by_desc(JobColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(to_job).collect()
    }

    async fn complete(
        &self,
        owner: UserId,
        job_id: Uuid,
        result_url: &str,
    ) -> Result<EnhancementJob, EnhancementJobRepositoryError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let job = JobEntity::find_by_id(job_id)
            .filter(JobColumn::UserId.eq(owner.value()))
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or(EnhancementJobRepositoryError::JobNotFound)?;

        if job.status == JobStatus::Completed.as_str() {
            txn.commit().await.map_err(db_error)?;
            return to_job(job);
        }

        let now = Utc::now();
        let version = insert_version(&txn, job.image_id, VersionType::Enhanced, result_url, now)
            .await
            .map_err(db_error)?;

        let mut active = job.into_active_model();
        active.status = Set(JobStatus::Completed.as_str().to_string());
        active.result_version_id = Set(Some(version.id));
        active.updated_at = Set(now.fixed_offset());

        let updated = active.update(&txn).await.map_err(db_error)?;
        txn.commit().await.map_err(db_error)?;

        to_job(updated)
    }
}
