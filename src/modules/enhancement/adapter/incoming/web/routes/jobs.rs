use actix_web::{get, post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::enhancement::application::domain::entities::EnhancementJob;
use crate::modules::enhancement::application::ports::incoming::use_cases::{
    CompleteJobError, CreateJobsCommand, CreateJobsError, ListJobsError,
};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: Uuid,
    pub project_id: Uuid,
    pub image_id: Uuid,
    #[schema(example = "PENDING")]
    pub status: String,
    /// The ENHANCED image version, once completed
    pub result_version_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EnhancementJob> for JobResponse {
    fn from(job: EnhancementJob) -> Self {
        Self {
            id: job.id,
            project_id: job.project_id,
            image_id: job.image_id,
            status: job.status.to_string(),
            result_version_id: job.result_version_id,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobsRequest {
    pub project_id: Uuid,
    /// One credit is charged per image
    pub image_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompleteJobRequest {
    #[schema(example = "https://cdn.example.com/enhanced/living-room.jpg")]
    pub enhanced_url: String,
}

fn job_list(jobs: Vec<EnhancementJob>) -> Vec<JobResponse> {
    jobs.into_iter().map(JobResponse::from).collect()
}

/// Queue enhancement for a batch of images
///
/// Draws one credit per image from the active subscription.
#[utoipa::path(
    post,
    path = "/api/enhancement/jobs",
    tag = "enhancement",
    security(("bearer_auth" = [])),
    request_body = CreateJobsRequest,
    responses(
        (status = 201, description = "One PENDING job per image", body = inline(SuccessResponse<Vec<JobResponse>>)),
        (status = 400, description = "Empty or duplicate ids, or images outside the project", body = ErrorResponse),
        (status = 402, description = "No active subscription or not enough credits", body = ErrorResponse),
        (status = 404, description = "Project missing or not yours", body = ErrorResponse),
    )
)]
#[post("/api/enhancement/jobs")]
pub async fn create_jobs_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateJobsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = CreateJobsCommand {
        owner: user.user_id,
        project_id: dto.project_id,
        image_ids: dto.image_ids,
    };

    match data.enhancement.create_jobs.execute(command).await {
        Ok(jobs) => ApiResponse::created(job_list(jobs)),

        Err(CreateJobsError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(CreateJobsError::ProjectNotFound) => {
            ApiResponse::fail(ErrorCode::ProjectNotFound, "Project not found")
        }
        Err(CreateJobsError::InvalidImages) => ApiResponse::fail(
            ErrorCode::InvalidImages,
            "Some images do not belong to this project",
        ),
        Err(CreateJobsError::NoActiveSubscription) => ApiResponse::fail(
            ErrorCode::NoActiveSubscription,
            "An active subscription is required",
        ),
        Err(CreateJobsError::InsufficientCredits {
            required,
            remaining,
        }) => {
            warn!(user_id = %user.user_id, required, remaining, "Enhancement refused");
            ApiResponse::fail(
                ErrorCode::InsufficientCredits,
                &format!(
                    "{} credits required, {} remaining",
                    required,
                    remaining.max(0)
                ),
            )
        }
        Err(CreateJobsError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Creating enhancement jobs failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Enhancement jobs of a project, newest first
#[utoipa::path(
    get,
    path = "/api/enhancement/projects/{id}/jobs",
    tag = "enhancement",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Jobs", body = inline(SuccessResponse<Vec<JobResponse>>)),
        (status = 404, description = "Project missing or not yours", body = ErrorResponse),
    )
)]
#[get("/api/enhancement/projects/{id}/jobs")]
pub async fn list_jobs_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.enhancement.list_jobs.execute(user.user_id, project_id).await {
        Ok(jobs) => ApiResponse::success(job_list(jobs)),
        Err(ListJobsError::ProjectNotFound) => {
            ApiResponse::fail(ErrorCode::ProjectNotFound, "Project not found")
        }
        Err(ListJobsError::RepositoryError(msg)) => {
            error!(project_id = %project_id, "Listing jobs failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Record the enhanced result of a job
///
/// Safe to repeat: a completed job is returned unchanged.
#[utoipa::path(
    post,
    path = "/api/enhancement/jobs/{id}/complete",
    tag = "enhancement",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Job id")),
    request_body = CompleteJobRequest,
    responses(
        (status = 200, description = "Completed job", body = inline(SuccessResponse<JobResponse>)),
        (status = 400, description = "Missing URL", body = ErrorResponse),
        (status = 404, description = "Job missing or not yours", body = ErrorResponse),
    )
)]
#[post("/api/enhancement/jobs/{id}/complete")]
pub async fn complete_job_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CompleteJobRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();

    match data
        .enhancement
        .complete_job
        .execute(user.user_id, job_id, &req.enhanced_url)
        .await
    {
        Ok(job) => ApiResponse::success(JobResponse::from(job)),
        Err(CompleteJobError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(CompleteJobError::JobNotFound) => {
            ApiResponse::fail(ErrorCode::JobNotFound, "Job not found")
        }
        Err(CompleteJobError::RepositoryError(msg)) => {
            error!(job_id = %job_id, "Completing job failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
