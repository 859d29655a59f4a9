use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use super::dto::{MarketplaceDetailResponse, MarketplaceListingResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::listing::application::domain::entities::MarketplaceFilter;
use crate::modules::listing::application::ports::incoming::use_cases::{
    GetMarketplaceListingError, ListMarketplaceError,
};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MarketplaceQuery {
    /// Exact, case-sensitive match
    pub city: Option<String>,
    pub country: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Exact bedroom count
    pub bedrooms: Option<i32>,
}

impl From<MarketplaceQuery> for MarketplaceFilter {
    fn from(query: MarketplaceQuery) -> Self {
        Self {
            city: query.city,
            country: query.country,
            min_price: query.min_price,
            max_price: query.max_price,
            bedrooms: query.bedrooms,
        }
    }
}

/// Published listings, newest first, each with its hero image
#[utoipa::path(
    get,
    path = "/api/marketplace/listings",
    tag = "marketplace",
    params(MarketplaceQuery),
    responses(
        (status = 200, description = "Listings", body = inline(SuccessResponse<Vec<MarketplaceListingResponse>>)),
        (status = 400, description = "minPrice above maxPrice", body = ErrorResponse),
    )
)]
#[get("/api/marketplace/listings")]
pub async fn list_marketplace_handler(
    query: web::Query<MarketplaceQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.listing.list_marketplace.execute(query.into_inner().into()).await {
        Ok(listings) => ApiResponse::success(
            listings
                .into_iter()
                .map(MarketplaceListingResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListMarketplaceError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(ListMarketplaceError::RepositoryError(msg)) => {
            error!("Marketplace search failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// A published listing with its full gallery and project
#[utoipa::path(
    get,
    path = "/api/marketplace/listings/{id}",
    tag = "marketplace",
    params(("id" = Uuid, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Listing", body = inline(SuccessResponse<MarketplaceDetailResponse>)),
        (status = 404, description = "Missing or unpublished", body = ErrorResponse),
    )
)]
#[get("/api/marketplace/listings/{id}")]
pub async fn get_marketplace_listing_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let listing_id = path.into_inner();

    match data.listing.get_marketplace.execute(listing_id).await {
        Ok(detail) => ApiResponse::success(MarketplaceDetailResponse::from(detail)),
        Err(GetMarketplaceListingError::ListingNotFound) => {
            ApiResponse::fail(ErrorCode::ListingNotFound, "Listing not found")
        }
        Err(GetMarketplaceListingError::RepositoryError(msg)) => {
            error!(listing_id = %listing_id, "Loading marketplace listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
