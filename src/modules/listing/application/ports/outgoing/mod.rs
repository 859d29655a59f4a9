pub mod listing_query;
pub mod listing_repository;

pub use listing_query::{ListingQuery, ListingQueryError};
pub use listing_repository::{ListingPatch, ListingRepository, ListingRepositoryError, NewListing};
