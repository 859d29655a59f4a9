pub mod enhancement_job_repository;

pub use enhancement_job_repository::{
    EnhancementJobRepository, EnhancementJobRepositoryError, JobAdmission,
};
