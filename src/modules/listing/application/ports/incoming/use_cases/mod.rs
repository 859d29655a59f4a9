pub mod attach_media;
pub mod create_listing;
pub mod create_listing_with_media;
pub mod get_marketplace_listing;
pub mod get_my_listing;
pub mod list_marketplace;
pub mod list_my_listings;
pub mod update_listing;

pub use attach_media::{AttachMediaCommand, AttachMediaError, AttachMediaUseCase};
pub use create_listing::{CreateListingCommand, CreateListingError, CreateListingUseCase};
pub use create_listing_with_media::{
    CreateListingWithMediaCommand, CreateListingWithMediaError, CreateListingWithMediaUseCase,
};
pub use get_marketplace_listing::{GetMarketplaceListingError, GetMarketplaceListingUseCase};
pub use get_my_listing::{GetMyListingError, GetMyListingUseCase};
pub use list_marketplace::{ListMarketplaceError, ListMarketplaceUseCase};
pub use list_my_listings::{ListMyListingsError, ListMyListingsUseCase};
pub use update_listing::{UpdateListingError, UpdateListingUseCase};
