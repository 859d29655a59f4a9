use actix_web::{get, post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::{ImageVersion, ImageWithVersions};
use crate::modules::project::application::ports::incoming::use_cases::{
    AddImageCommand, AddImageError, ListImagesError,
};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageVersionResponse {
    pub id: Uuid,
    #[schema(example = "ORIGINAL")]
    pub version_type: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<ImageVersion> for ImageVersionResponse {
    fn from(version: ImageVersion) -> Self {
        Self {
            id: version.id,
            version_type: version.version_type.to_string(),
            url: version.url,
            created_at: version.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Oldest first; the first is the ORIGINAL
    pub versions: Vec<ImageVersionResponse>,
}

impl From<ImageWithVersions> for ImageResponse {
    fn from(value: ImageWithVersions) -> Self {
        Self {
            id: value.image.id,
            project_id: value.image.project_id,
            label: value.image.label,
            created_at: value.image.created_at,
            versions: value
                .versions
                .into_iter()
                .map(ImageVersionResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddImageRequest {
    #[schema(example = "https://cdn.example.com/photos/living-room.jpg")]
    pub original_url: String,
    #[serde(default)]
    #[schema(example = "Living room")]
    pub label: Option<String>,
}

/// Images of a project with all their versions
#[utoipa::path(
    get,
    path = "/api/projects/{id}/images",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Images, newest first", body = inline(SuccessResponse<Vec<ImageResponse>>)),
        (status = 404, description = "Project missing or not yours", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}/images")]
pub async fn list_images_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.list_images.execute(user.user_id, project_id).await {
        Ok(images) => ApiResponse::success(
            images
                .into_iter()
                .map(ImageResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListImagesError::ProjectNotFound) => {
            ApiResponse::fail(ErrorCode::ProjectNotFound, "Project not found")
        }
        Err(ListImagesError::QueryFailed(msg)) => {
            error!(project_id = %project_id, "Listing images failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Register an image that is already hosted elsewhere
#[utoipa::path(
    post,
    path = "/api/projects/{id}/images",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = AddImageRequest,
    responses(
        (status = 201, description = "Image with its ORIGINAL version", body = inline(SuccessResponse<ImageResponse>)),
        (status = 400, description = "Missing URL", body = ErrorResponse),
        (status = 404, description = "Project missing or not yours", body = ErrorResponse),
    )
)]
#[post("/api/projects/{id}/images")]
pub async fn add_image_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddImageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();
    let dto = req.into_inner();

    let command = AddImageCommand {
        owner: user.user_id,
        project_id,
        original_url: dto.original_url,
        label: dto.label,
    };

    match data.project.add_image.execute(command).await {
        Ok(image) => ApiResponse::created(ImageResponse::from(image)),
        Err(AddImageError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(AddImageError::ProjectNotFound) => {
            ApiResponse::fail(ErrorCode::ProjectNotFound, "Project not found")
        }
        Err(AddImageError::RepositoryError(msg)) => {
            error!(project_id = %project_id, "Adding image failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
