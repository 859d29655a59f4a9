use actix_web::{get, patch, post, web, Responder};
use tracing::{error, warn};
use uuid::Uuid;

use super::dto::{
    AttachMediaRequest, CreateListingRequest, CreateListingWithMediaRequest,
    ListingDetailResponse, ListingResponse, UpdateListingRequest,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::listing::application::ports::incoming::use_cases::{
    AttachMediaCommand, AttachMediaError, CreateListingCommand, CreateListingError,
    CreateListingWithMediaCommand, CreateListingWithMediaError, GetMyListingError,
    UpdateListingError,
};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

const LISTING_NOT_FOUND: &str = "Listing not found";
const FOREIGN_VERSIONS: &str = "Image versions must belong to the listing's project";

/// Listings owned by the caller, newest first
#[utoipa::path(
    get,
    path = "/api/listings",
    tag = "listings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Listings", body = inline(SuccessResponse<Vec<ListingResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/listings")]
pub async fn list_my_listings_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.listing.list_mine.execute(user.user_id).await {
        Ok(listings) => ApiResponse::success(
            listings
                .into_iter()
                .map(ListingResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(user_id = %user.user_id, "Listing listings failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Create a draft listing for one of the caller's projects
#[utoipa::path(
    post,
    path = "/api/listings",
    tag = "listings",
    security(("bearer_auth" = [])),
    request_body = CreateListingRequest,
    responses(
        (status = 201, description = "Listing created", body = inline(SuccessResponse<ListingResponse>)),
        (status = 400, description = "Missing title or bad numbers", body = ErrorResponse),
        (status = 404, description = "Project missing or not yours", body = ErrorResponse),
    )
)]
#[post("/api/listings")]
pub async fn create_listing_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateListingRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (project_id, fields) = req.into_inner().into_parts();
    let command = CreateListingCommand {
        owner: user.user_id,
        project_id,
        fields,
    };

    match data.listing.create.execute(command).await {
        Ok(listing) => ApiResponse::created(ListingResponse::from(listing)),
        Err(CreateListingError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(CreateListingError::ProjectNotFound) => {
            ApiResponse::fail(ErrorCode::ProjectNotFound, "Project not found")
        }
        Err(CreateListingError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Creating listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Create a listing and its gallery in one step
#[utoipa::path(
    post,
    path = "/api/listings/with-media",
    tag = "listings",
    security(("bearer_auth" = [])),
    request_body = CreateListingWithMediaRequest,
    responses(
        (status = 201, description = "Listing created", body = inline(SuccessResponse<ListingDetailResponse>)),
        (status = 400, description = "Invalid fields, empty gallery or foreign versions", body = ErrorResponse),
        (status = 404, description = "Project missing or not yours", body = ErrorResponse),
    )
)]
#[post("/api/listings/with-media")]
pub async fn create_listing_with_media_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateListingWithMediaRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let (project_id, fields) = dto.listing.into_parts();
    let command = CreateListingWithMediaCommand {
        owner: user.user_id,
        project_id,
        fields,
        image_version_ids: dto.image_version_ids,
        hero_image_version_id: dto.hero_image_version_id,
    };

    match data.listing.create_with_media.execute(command).await {
        Ok(created) => ApiResponse::created(ListingDetailResponse::from(created)),
        Err(CreateListingWithMediaError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(CreateListingWithMediaError::ProjectNotFound) => {
            ApiResponse::fail(ErrorCode::ProjectNotFound, "Project not found")
        }
        Err(CreateListingWithMediaError::InvalidImageVersions) => {
            ApiResponse::fail(ErrorCode::InvalidImageVersions, FOREIGN_VERSIONS)
        }
        Err(CreateListingWithMediaError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Creating listing with media failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// One of the caller's listings, with its gallery
#[utoipa::path(
    get,
    path = "/api/listings/{id}",
    tag = "listings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Listing", body = inline(SuccessResponse<ListingDetailResponse>)),
        (status = 404, description = "Missing or not yours", body = ErrorResponse),
    )
)]
#[get("/api/listings/{id}")]
pub async fn get_my_listing_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let listing_id = path.into_inner();

    match data.listing.get_mine.execute(user.user_id, listing_id).await {
        Ok(listing) => ApiResponse::success(ListingDetailResponse::from(listing)),
        Err(GetMyListingError::ListingNotFound) => {
            ApiResponse::fail(ErrorCode::ListingNotFound, LISTING_NOT_FOUND)
        }
        Err(GetMyListingError::RepositoryError(msg)) => {
            error!(listing_id = %listing_id, "Loading listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Patch a listing; setting `status` also moves `isPublished`
#[utoipa::path(
    patch,
    path = "/api/listings/{id}",
    tag = "listings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Listing id")),
    request_body = UpdateListingRequest,
    responses(
        (status = 200, description = "Listing updated", body = inline(SuccessResponse<ListingResponse>)),
        (status = 400, description = "Invalid value", body = ErrorResponse),
        (status = 404, description = "Missing or not yours", body = ErrorResponse),
    )
)]
#[patch("/api/listings/{id}")]
pub async fn update_listing_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateListingRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let listing_id = path.into_inner();

    match data
        .listing
        .update
        .execute(user.user_id, listing_id, req.into_inner().into())
        .await
    {
        Ok(listing) => ApiResponse::success(ListingResponse::from(listing)),
        Err(UpdateListingError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(UpdateListingError::ListingNotFound) => {
            ApiResponse::fail(ErrorCode::ListingNotFound, LISTING_NOT_FOUND)
        }
        Err(UpdateListingError::RepositoryError(msg)) => {
            error!(listing_id = %listing_id, "Updating listing failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Replace a listing's gallery
#[utoipa::path(
    post,
    path = "/api/listings/{id}/media",
    tag = "listings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Listing id")),
    request_body = AttachMediaRequest,
    responses(
        (status = 200, description = "Gallery replaced", body = inline(SuccessResponse<ListingDetailResponse>)),
        (status = 400, description = "Empty gallery, duplicates or foreign versions", body = ErrorResponse),
        (status = 404, description = "Missing or not yours", body = ErrorResponse),
    )
)]
#[post("/api/listings/{id}/media")]
pub async fn attach_media_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AttachMediaRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let listing_id = path.into_inner();
    let dto = req.into_inner();
    let command = AttachMediaCommand {
        owner: user.user_id,
        listing_id,
        image_version_ids: dto.image_version_ids,
        hero_image_version_id: dto.hero_image_version_id,
    };

    match data.listing.attach_media.execute(command).await {
        Ok(listing) => ApiResponse::success(ListingDetailResponse::from(listing)),
        Err(AttachMediaError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(AttachMediaError::ListingNotFound) => {
            ApiResponse::fail(ErrorCode::ListingNotFound, LISTING_NOT_FOUND)
        }
        Err(AttachMediaError::InvalidImageVersions) => {
            warn!(listing_id = %listing_id, "Gallery names foreign image versions");
            ApiResponse::fail(ErrorCode::InvalidImageVersions, FOREIGN_VERSIONS)
        }
        Err(AttachMediaError::RepositoryError(msg)) => {
            error!(listing_id = %listing_id, "Replacing gallery failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
