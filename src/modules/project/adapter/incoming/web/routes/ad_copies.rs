use actix_web::{delete, get, patch, post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::AdCopy;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateAdCopyCommand, CreateAdCopyError, DeleteAdCopyError, ListAdCopiesError,
    UpdateAdCopyError,
};
use crate::modules::project::application::ports::outgoing::AdCopyPatch;
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::shared::patch::PatchField;
use crate::AppState;

const AD_COPY_NOT_FOUND: &str = "Ad copy not found";

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdCopyResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    #[schema(example = "instagram")]
    pub channel: String,
    #[schema(example = "Waterfront living")]
    pub title: String,
    pub description: String,
    #[schema(example = "harbour, balcony, renovated")]
    pub keywords: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AdCopy> for AdCopyResponse {
    fn from(copy: AdCopy) -> Self {
        Self {
            id: copy.id,
            project_id: copy.project_id,
            channel: copy.channel,
            title: copy.title,
            description: copy.description,
            keywords: copy.keywords,
            created_at: copy.created_at,
            updated_at: copy.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdCopyRequest {
    #[schema(example = "instagram")]
    pub channel: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdCopyRequest {
    pub channel: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// `null` clears the keywords
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub keywords: PatchField<String>,
}

impl From<UpdateAdCopyRequest> for AdCopyPatch {
    fn from(dto: UpdateAdCopyRequest) -> Self {
        Self {
            channel: dto.channel,
            title: dto.title,
            description: dto.description,
            keywords: dto.keywords,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdCopyDeletedResponse {
    pub id: Uuid,
    pub deleted: bool,
}

/// Ad copies of one project, newest first
#[utoipa::path(
    get,
    path = "/api/projects/{id}/ad-copies",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Ad copies", body = inline(SuccessResponse<Vec<AdCopyResponse>>)),
        (status = 404, description = "Project missing or not yours", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}/ad-copies")]
pub async fn list_ad_copies_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.list_ad_copies.execute(user.user_id, project_id).await {
        Ok(copies) => ApiResponse::success(
            copies
                .into_iter()
                .map(AdCopyResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListAdCopiesError::ProjectNotFound) => {
            ApiResponse::fail(ErrorCode::ProjectNotFound, "Project not found")
        }
        Err(ListAdCopiesError::RepositoryError(msg)) => {
            error!(project_id = %project_id, "Listing ad copies failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Write an ad copy for a project
#[utoipa::path(
    post,
    path = "/api/projects/{id}/ad-copies",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = CreateAdCopyRequest,
    responses(
        (status = 201, description = "Ad copy created", body = inline(SuccessResponse<AdCopyResponse>)),
        (status = 400, description = "channel, title and description are required", body = ErrorResponse),
        (status = 404, description = "Project missing or not yours", body = ErrorResponse),
    )
)]
#[post("/api/projects/{id}/ad-copies")]
pub async fn create_ad_copy_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateAdCopyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();
    let dto = req.into_inner();
    let command = CreateAdCopyCommand {
        owner: user.user_id,
        project_id,
        channel: dto.channel,
        title: dto.title,
        description: dto.description,
        keywords: dto.keywords,
    };

    match data.project.create_ad_copy.execute(command).await {
        Ok(copy) => ApiResponse::created(AdCopyResponse::from(copy)),
        Err(CreateAdCopyError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(CreateAdCopyError::ProjectNotFound) => {
            ApiResponse::fail(ErrorCode::ProjectNotFound, "Project not found")
        }
        Err(CreateAdCopyError::RepositoryError(msg)) => {
            error!(project_id = %project_id, "Creating ad copy failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Patch an ad copy; omitted fields are kept
#[utoipa::path(
    patch,
    path = "/api/projects/{id}/ad-copies/{ad_copy_id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Project id"),
        ("ad_copy_id" = Uuid, Path, description = "Ad copy id"),
    ),
    request_body = UpdateAdCopyRequest,
    responses(
        (status = 200, description = "Ad copy updated", body = inline(SuccessResponse<AdCopyResponse>)),
        (status = 400, description = "Blank required field", body = ErrorResponse),
        (status = 404, description = "Ad copy or project missing or not yours", body = ErrorResponse),
    )
)]
#[patch("/api/projects/{id}/ad-copies/{ad_copy_id}")]
pub async fn update_ad_copy_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    req: web::Json<UpdateAdCopyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (project_id, ad_copy_id) = path.into_inner();
    let patch = AdCopyPatch::from(req.into_inner());

    match data
        .project
        .update_ad_copy
        .execute(user.user_id, project_id, ad_copy_id, patch)
        .await
    {
        Ok(copy) => ApiResponse::success(AdCopyResponse::from(copy)),
        Err(UpdateAdCopyError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(UpdateAdCopyError::AdCopyNotFound) => {
            ApiResponse::fail(ErrorCode::AdCopyNotFound, AD_COPY_NOT_FOUND)
        }
        Err(UpdateAdCopyError::RepositoryError(msg)) => {
            error!(ad_copy_id = %ad_copy_id, "Updating ad copy failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Delete an ad copy
#[utoipa::path(
    delete,
    path = "/api/projects/{id}/ad-copies/{ad_copy_id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Project id"),
        ("ad_copy_id" = Uuid, Path, description = "Ad copy id"),
    ),
    responses(
        (status = 200, description = "Ad copy deleted", body = inline(SuccessResponse<AdCopyDeletedResponse>)),
        (status = 404, description = "Ad copy or project missing or not yours", body = ErrorResponse),
    )
)]
#[delete("/api/projects/{id}/ad-copies/{ad_copy_id}")]
pub async fn delete_ad_copy_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (project_id, ad_copy_id) = path.into_inner();

    match data
        .project
        .delete_ad_copy
        .execute(user.user_id, project_id, ad_copy_id)
        .await
    {
        Ok(()) => ApiResponse::success(AdCopyDeletedResponse {
            id: ad_copy_id,
            deleted: true,
        }),
        Err(DeleteAdCopyError::AdCopyNotFound) => {
            ApiResponse::fail(ErrorCode::AdCopyNotFound, AD_COPY_NOT_FOUND)
        }
        Err(DeleteAdCopyError::RepositoryError(msg)) => {
            error!(ad_copy_id = %ad_copy_id, "Deleting ad copy failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
