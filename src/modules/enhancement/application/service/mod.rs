pub mod complete_job_service;
pub mod create_jobs_service;
pub mod list_jobs_service;

pub use complete_job_service::CompleteJobService;
pub use create_jobs_service::CreateJobsService;
pub use list_jobs_service::ListJobsService;
