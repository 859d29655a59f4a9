//! In-memory enhancement jobs backed by the billing and catalogue fakes.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::billing_fakes::InMemorySubscriptions;
use super::project_fakes::InMemoryProjects;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::billing::application::domain::entities::remaining_credits;
use crate::modules::billing::application::ports::outgoing::SubscriptionRepository;
use crate::modules::enhancement::application::domain::admission::credits_required;
use crate::modules::enhancement::application::domain::entities::{EnhancementJob, JobStatus};
use crate::modules::enhancement::application::ports::outgoing::{
    EnhancementJobRepository, EnhancementJobRepositoryError, JobAdmission,
};
use crate::modules::project::application::domain::entities::{ImageVersion, VersionType};

#[derive(Clone)]
pub struct InMemoryJobs {
    subscriptions: InMemorySubscriptions,
    projects: InMemoryProjects,
    jobs: Arc<Mutex<Vec<EnhancementJob>>>,
    usage_rows: Arc<Mutex<Vec<i64>>>,
    // Stands in for the subscription row lock.
    admission: Arc<tokio::sync::Mutex<()>>,
}

impl InMemoryJobs {
    pub fn new(subscriptions: InMemorySubscriptions, projects: InMemoryProjects) -> Self {
        Self {
            subscriptions,
            projects,
            jobs: Arc::new(Mutex::new(Vec::new())),
            usage_rows: Arc::new(Mutex::new(Vec::new())),
            admission: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    pub fn seed_pending(&self, owner: UserId, project_id: Uuid, image_id: Uuid) -> EnhancementJob {
        let mut jobs = self.jobs.lock().unwrap();
        let now = Utc::now() + Duration::milliseconds(jobs.len() as i64);
        let job = EnhancementJob::pending(owner, project_id, image_id, now);
        jobs.push(job.clone());
        job
    }

    pub fn all(&self) -> Vec<EnhancementJob> {
        self.jobs.lock().unwrap().clone()
    }

    /// Credits of each usage row written by `admit`, in order.
    pub fn usage_rows(&self) -> Vec<i64> {
        self.usage_rows.lock().unwrap().clone()
    }
}

fn db(e: impl ToString) -> EnhancementJobRepositoryError {
    EnhancementJobRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl EnhancementJobRepository for InMemoryJobs {
    async fn admit(
        &self,
        admission: JobAdmission,
    ) -> Result<Vec<EnhancementJob>, EnhancementJobRepositoryError> {
        let _guard = self.admission.lock().await;

        let active = self
            .subscriptions
            .find_active(admission.owner)
            .await
            .map_err(db)?
            .ok_or(EnhancementJobRepositoryError::NoActiveSubscription)?;
        let used = self
            .subscriptions
            .used_credits(active.subscription.id)
            .await
            .map_err(db)?;

        let required = credits_required(admission.image_ids.len());
        let remaining = remaining_credits(active.plan.max_ai_credits, used);
        if remaining < required {
            return Err(EnhancementJobRepositoryError::InsufficientCredits {
                required,
                remaining,
            });
        }

        let now = Utc::now();
        let created: Vec<EnhancementJob> = admission
            .image_ids
            .iter()
            .map(|image_id| {
                EnhancementJob::pending(admission.owner, admission.project_id, *image_id, now)
            })
            .collect();

        self.jobs.lock().unwrap().extend(created.iter().cloned());
        self.usage_rows.lock().unwrap().push(required);
        self.subscriptions
            .record_usage(active.subscription.id, required);

        Ok(created)
    }

    async fn list_for_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<EnhancementJob>, EnhancementJobRepositoryError> {
        let mut jobs: Vec<EnhancementJob> = self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.project_id == project_id)
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn complete(
        &self,
        owner: UserId,
        job_id: Uuid,
        result_url: &str,
    ) -> Result<EnhancementJob, EnhancementJobRepositoryError> {
        let mut jobs = self.jobs.lock().unwrap();
        let job = jobs
            .iter_mut()
            .find(|j| j.id == job_id && j.user_id == owner)
            .ok_or(EnhancementJobRepositoryError::JobNotFound)?;

        if job.status == JobStatus::Completed {
            return Ok(job.clone());
        }

        let now = Utc::now();
        let version = ImageVersion {
            id: Uuid::new_v4(),
            image_id: job.image_id,
            version_type: VersionType::Enhanced,
            url: result_url.to_string(),
            created_at: now,
        };
        self.projects.push_version(job.image_id, version.clone());

        job.status = JobStatus::Completed;
        job.result_version_id = Some(version.id);
        job.updated_at = now;
        Ok(job.clone())
    }
}
