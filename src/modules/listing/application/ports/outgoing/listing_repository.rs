use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::{
    Listing, ListingFields, ListingMedia, ListingStatus, ListingWithMedia,
};
use crate::modules::listing::application::domain::media_plan::MediaSlot;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub owner: UserId,
    pub project_id: Uuid,
    pub fields: ListingFields,
}

/// Only the present fields are written.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: PatchField<String>,
    pub price: PatchField<f64>,
    pub currency: PatchField<String>,
    pub location_city: PatchField<String>,
    pub location_state: PatchField<String>,
    pub location_country: PatchField<String>,
    pub property_type: PatchField<String>,
    pub bedrooms: PatchField<i32>,
    pub bathrooms: PatchField<i32>,
    pub area_sqm: PatchField<f64>,
    pub status: Option<ListingStatus>,
}

impl ListingPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_unset()
            && self.price.is_unset()
            && self.currency.is_unset()
            && self.location_city.is_unset()
            && self.location_state.is_unset()
            && self.location_country.is_unset()
            && self.property_type.is_unset()
            && self.bedrooms.is_unset()
            && self.bathrooms.is_unset()
            && self.area_sqm.is_unset()
            && self.status.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListingRepositoryError {
    #[error("Listing not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Starts as DRAFT, unpublished.
    async fn create_listing(&self, data: NewListing) -> Result<Listing, ListingRepositoryError>;

    /// Listing and gallery in one transaction.
    async fn create_with_media(
        &self,
        data: NewListing,
        media: Vec<MediaSlot>,
    ) -> Result<ListingWithMedia, ListingRepositoryError>;

    /// `NotFound` when the listing is missing or someone else's.
    async fn update_listing(
        &self,
        owner: UserId,
        listing_id: Uuid,
        patch: ListingPatch,
    ) -> Result<Listing, ListingRepositoryError>;

    /// Deletes the current gallery and writes `media`, atomically.
    async fn replace_media(
        &self,
        listing_id: Uuid,
        media: Vec<MediaSlot>,
    ) -> Result<Vec<ListingMedia>, ListingRepositoryError>;
}
