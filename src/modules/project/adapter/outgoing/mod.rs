pub mod ad_copy_repository_postgres;
pub mod project_query_postgres;
pub mod project_repository_postgres;
pub mod sea_orm_entity;

pub use ad_copy_repository_postgres::AdCopyRepositoryPostgres;
pub use project_query_postgres::ProjectQueryPostgres;
pub use project_repository_postgres::{insert_version, ProjectRepositoryPostgres};
