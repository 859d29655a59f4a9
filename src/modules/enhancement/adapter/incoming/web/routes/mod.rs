mod jobs;

use actix_web::web;

pub use jobs::{
    complete_job_handler, create_jobs_handler, list_jobs_handler, CompleteJobRequest,
    CreateJobsRequest, JobResponse,
};

pub use jobs::{__path_complete_job_handler, __path_create_jobs_handler, __path_list_jobs_handler};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_jobs_handler)
        .service(list_jobs_handler)
        .service(complete_job_handler);
}
