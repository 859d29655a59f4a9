use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::listing::application::domain::entities::{
    Listing, ListingFields, ListingMedia, ListingStatus, ListingWithMedia, MarketplaceDetail,
};
use crate::modules::listing::application::ports::outgoing::ListingPatch;
use crate::shared::patch::PatchField;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingMediaResponse {
    pub id: Uuid,
    pub image_version_id: Uuid,
    #[schema(example = "https://aipix-media.s3.us-east-1.amazonaws.com/projects/p/kitchen.jpg")]
    pub url: String,
    pub sort_order: i32,
    pub is_hero: bool,
}

impl From<ListingMedia> for ListingMediaResponse {
    fn from(media: ListingMedia) -> Self {
        Self {
            id: media.id,
            image_version_id: media.image_version_id,
            url: media.url,
            sort_order: media.sort_order,
            is_hero: media.is_hero,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    #[schema(example = "Sunny two-bed near the harbour")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = 325000.0)]
    pub price: Option<f64>,
    #[schema(example = "USD")]
    pub currency: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_country: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area_sqm: Option<f64>,
    #[schema(example = "DRAFT")]
    pub status: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        let fields = listing.fields;
        Self {
            id: listing.id,
            project_id: listing.project_id,
            title: fields.title,
            description: fields.description,
            price: fields.price,
            currency: fields.currency,
            location_city: fields.location_city,
            location_state: fields.location_state,
            location_country: fields.location_country,
            property_type: fields.property_type,
            bedrooms: fields.bedrooms,
            bathrooms: fields.bathrooms,
            area_sqm: fields.area_sqm,
            status: listing.status.to_string(),
            is_published: listing.is_published,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

/// A listing with its gallery in display order.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetailResponse {
    #[serde(flatten)]
    pub listing: ListingResponse,
    pub media: Vec<ListingMediaResponse>,
}

impl From<ListingWithMedia> for ListingDetailResponse {
    fn from(value: ListingWithMedia) -> Self {
        Self {
            listing: ListingResponse::from(value.listing),
            media: value.media.into_iter().map(ListingMediaResponse::from).collect(),
        }
    }
}

/// Marketplace card: the listing and its hero image.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceListingResponse {
    #[serde(flatten)]
    pub listing: ListingResponse,
    pub hero: Option<ListingMediaResponse>,
}

impl From<ListingWithMedia> for MarketplaceListingResponse {
    fn from(value: ListingWithMedia) -> Self {
        let hero = value.hero().cloned().map(ListingMediaResponse::from);
        Self {
            listing: ListingResponse::from(value.listing),
            hero,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummaryResponse {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceDetailResponse {
    #[serde(flatten)]
    pub listing: ListingResponse,
    pub media: Vec<ListingMediaResponse>,
    pub project: Option<ProjectSummaryResponse>,
}

impl From<MarketplaceDetail> for MarketplaceDetailResponse {
    fn from(detail: MarketplaceDetail) -> Self {
        let ListingDetailResponse { listing, media } = detail.listing.into();
        Self {
            listing,
            media,
            project: detail.project.map(|p| ProjectSummaryResponse {
                id: p.id,
                name: p.name,
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub project_id: Uuid,
    #[schema(example = "Sunny two-bed near the harbour")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub location_country: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<i32>,
    #[serde(default)]
    pub bathrooms: Option<i32>,
    #[serde(default)]
    pub area_sqm: Option<f64>,
}

impl CreateListingRequest {
    pub fn into_parts(self) -> (Uuid, ListingFields) {
        (
            self.project_id,
            ListingFields {
                title: self.title,
                description: self.description,
                price: self.price,
                currency: self.currency,
                location_city: self.location_city,
                location_state: self.location_state,
                location_country: self.location_country,
                property_type: self.property_type,
                bedrooms: self.bedrooms,
                bathrooms: self.bathrooms,
                area_sqm: self.area_sqm,
            },
        )
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingWithMediaRequest {
    #[serde(flatten)]
    pub listing: CreateListingRequest,
    /// Gallery order follows this list
    pub image_version_ids: Vec<Uuid>,
    /// Defaults to the first id
    #[serde(default)]
    pub hero_image_version_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachMediaRequest {
    pub image_version_ids: Vec<Uuid>,
    #[serde(default)]
    pub hero_image_version_id: Option<Uuid>,
}

/// Omitted fields are left alone; `null` clears an optional field.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingRequest {
    pub title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: PatchField<f64>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub currency: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub location_city: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub location_state: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub location_country: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub property_type: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub bedrooms: PatchField<i32>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub bathrooms: PatchField<i32>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub area_sqm: PatchField<f64>,
    /// `DRAFT`, `PUBLISHED` or `ARCHIVED`
    #[schema(value_type = Option<String>, example = "PUBLISHED")]
    pub status: Option<ListingStatus>,
}

impl From<UpdateListingRequest> for ListingPatch {
    fn from(dto: UpdateListingRequest) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            price: dto.price,
            currency: dto.currency,
            location_city: dto.location_city,
            location_state: dto.location_state,
            location_country: dto.location_country,
            property_type: dto.property_type,
            bedrooms: dto.bedrooms,
            bathrooms: dto.bathrooms,
            area_sqm: dto.area_sqm,
            status: dto.status,
        }
    }
}
