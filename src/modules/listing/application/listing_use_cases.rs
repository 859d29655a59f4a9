use std::sync::Arc;

use crate::modules::listing::application::ports::incoming::use_cases::{
    AttachMediaUseCase, CreateListingUseCase, CreateListingWithMediaUseCase,
    GetMarketplaceListingUseCase, GetMyListingUseCase, ListMarketplaceUseCase,
    ListMyListingsUseCase, UpdateListingUseCase,
};

#[derive(Clone)]
pub struct ListingUseCases {
    pub create: Arc<dyn CreateListingUseCase + Send + Sync>,
    pub create_with_media: Arc<dyn CreateListingWithMediaUseCase + Send + Sync>,
    pub list_mine: Arc<dyn ListMyListingsUseCase + Send + Sync>,
    pub get_mine: Arc<dyn GetMyListingUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateListingUseCase + Send + Sync>,
    pub attach_media: Arc<dyn AttachMediaUseCase + Send + Sync>,
    pub list_marketplace: Arc<dyn ListMarketplaceUseCase + Send + Sync>,
    pub get_marketplace: Arc<dyn GetMarketplaceListingUseCase + Send + Sync>,
}
