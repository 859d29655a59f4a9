mod attach_media_service;
mod create_listing_service;
mod create_listing_with_media_service;
mod get_marketplace_listing_service;
mod get_my_listing_service;
mod list_marketplace_service;
mod list_my_listings_service;
mod update_listing_service;

pub use attach_media_service::AttachMediaService;
pub use create_listing_service::CreateListingService;
pub use create_listing_with_media_service::CreateListingWithMediaService;
pub use get_marketplace_listing_service::GetMarketplaceListingService;
pub use get_my_listing_service::GetMyListingService;
pub use list_marketplace_service::ListMarketplaceService;
pub use list_my_listings_service::ListMyListingsService;
pub use update_listing_service::UpdateListingService;
