pub mod jwt;
pub mod role_query_postgres;
pub mod sea_orm_entity;
pub mod security;
pub mod single_use_token_repository_postgres;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use role_query_postgres::RoleQueryPostgres;
pub use single_use_token_repository_postgres::SingleUseTokenRepositoryPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
