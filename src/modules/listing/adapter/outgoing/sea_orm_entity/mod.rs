pub mod listing_media;
pub mod listings;
