use actix_web::{get, post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::ad_copies::AdCopyResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::project::application::domain::entities::{Project, ProjectDetail};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, GetProjectError,
};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: Uuid,
    #[schema(example = "12 Harbour Street")]
    pub name: String,
    #[schema(example = "Acme Realty")]
    pub client_name: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            client_name: project.client_name,
            notes: project.notes,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailResponse {
    #[serde(flatten)]
    pub project: ProjectResponse,
    pub ad_copies: Vec<AdCopyResponse>,
}

impl From<ProjectDetail> for ProjectDetailResponse {
    fn from(detail: ProjectDetail) -> Self {
        Self {
            project: ProjectResponse::from(detail.project),
            ad_copies: detail
                .ad_copies
                .into_iter()
                .map(AdCopyResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[schema(example = "12 Harbour Street")]
    pub name: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Projects owned by the caller, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Projects", body = inline(SuccessResponse<Vec<ProjectResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn list_projects_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.list.execute(user.user_id).await {
        Ok(projects) => ApiResponse::success(
            projects
                .into_iter()
                .map(ProjectResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(user_id = %user.user_id, "Listing projects failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Create a project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<ProjectResponse>)),
        (status = 400, description = "Missing name", body = ErrorResponse),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = CreateProjectCommand {
        owner: user.user_id,
        name: dto.name,
        client_name: dto.client_name,
        notes: dto.notes,
    };

    match data.project.create.execute(command).await {
        Ok(project) => ApiResponse::created(ProjectResponse::from(project)),
        Err(CreateProjectError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(CreateProjectError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Creating project failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// One project owned by the caller, with its ad copies
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = inline(SuccessResponse<ProjectDetailResponse>)),
        (status = 404, description = "Missing or not yours", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_project_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get.execute(user.user_id, project_id).await {
        Ok(detail) => ApiResponse::success(ProjectDetailResponse::from(detail)),
        Err(GetProjectError::ProjectNotFound) => {
            ApiResponse::fail(ErrorCode::ProjectNotFound, "Project not found")
        }
        Err(GetProjectError::QueryFailed(msg)) => {
            error!(project_id = %project_id, "Loading project failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
