pub mod enhancement_jobs;
