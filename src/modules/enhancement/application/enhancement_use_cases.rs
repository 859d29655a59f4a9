use std::sync::Arc;

use crate::modules::enhancement::application::ports::incoming::use_cases::{
    CompleteJobUseCase, CreateJobsUseCase, ListJobsUseCase,
};

#[derive(Clone)]
pub struct EnhancementUseCases {
    pub create_jobs: Arc<dyn CreateJobsUseCase + Send + Sync>,
    pub list_jobs: Arc<dyn ListJobsUseCase + Send + Sync>,
    pub complete_job: Arc<dyn CompleteJobUseCase + Send + Sync>,
}
