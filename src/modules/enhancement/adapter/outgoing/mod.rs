pub mod enhancement_job_repository_postgres;
pub mod sea_orm_entity;

pub use enhancement_job_repository_postgres::EnhancementJobRepositoryPostgres;
