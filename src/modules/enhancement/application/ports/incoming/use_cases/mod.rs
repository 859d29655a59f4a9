pub mod complete_job;
pub mod create_jobs;
pub mod list_jobs;

pub use complete_job::{CompleteJobError, CompleteJobUseCase};
pub use create_jobs::{CreateJobsCommand, CreateJobsError, CreateJobsUseCase};
pub use list_jobs::{ListJobsError, ListJobsUseCase};
