mod dto;
mod listings;
mod marketplace;

use actix_web::web;

pub use dto::{
    AttachMediaRequest, CreateListingRequest, CreateListingWithMediaRequest,
    ListingDetailResponse, ListingMediaResponse, ListingResponse, MarketplaceDetailResponse,
    MarketplaceListingResponse, ProjectSummaryResponse, UpdateListingRequest,
};
pub use listings::{
    attach_media_handler, create_listing_handler, create_listing_with_media_handler,
    get_my_listing_handler, list_my_listings_handler, update_listing_handler,
};
pub use marketplace::{get_marketplace_listing_handler, list_marketplace_handler, MarketplaceQuery};

pub use listings::{__path_attach_media_handler, __path_create_listing_handler, __path_create_listing_with_media_handler, __path_get_my_listing_handler, __path_list_my_listings_handler, __path_update_listing_handler};
pub use marketplace::{__path_get_marketplace_listing_handler, __path_list_marketplace_handler};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_my_listings_handler)
        .service(create_listing_handler)
        .service(create_listing_with_media_handler)
        .service(get_my_listing_handler)
        .service(update_listing_handler)
        .service(attach_media_handler)
        .service(list_marketplace_handler)
        .service(get_marketplace_listing_handler);
}
