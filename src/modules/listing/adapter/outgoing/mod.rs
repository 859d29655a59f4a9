pub mod listing_query_postgres;
pub mod listing_repository_postgres;
mod media_loader;
pub mod sea_orm_entity;

pub use listing_query_postgres::ListingQueryPostgres;
pub use listing_repository_postgres::ListingRepositoryPostgres;
