use actix_web::{get, patch, post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::{
    require_admin, AuthenticatedUser,
};
use crate::modules::billing::application::domain::entities::Plan;
use crate::modules::billing::application::ports::incoming::use_cases::{
    CreatePlanError, UpdatePlanError,
};
use crate::modules::billing::application::ports::outgoing::{NewPlan, PlanPatch};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::shared::patch::PatchField;
use crate::AppState;

// ── DTOs ────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub id: Uuid,
    #[schema(example = "Pro")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 49.0)]
    pub monthly_price_usd: f64,
    #[schema(example = 500)]
    pub max_ai_credits: i32,
    #[schema(example = 10000)]
    pub max_storage_mb: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            description: plan.description,
            monthly_price_usd: plan.monthly_price_usd,
            max_ai_credits: plan.max_ai_credits,
            max_storage_mb: plan.max_storage_mb,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    #[schema(example = "Pro")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 49.0)]
    pub monthly_price_usd: f64,
    #[schema(example = 500)]
    pub max_ai_credits: i32,
    #[schema(example = 10000)]
    pub max_storage_mb: i32,
}

impl From<CreatePlanRequest> for NewPlan {
    fn from(dto: CreatePlanRequest) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            monthly_price_usd: dto.monthly_price_usd,
            max_ai_credits: dto.max_ai_credits,
            max_storage_mb: dto.max_storage_mb,
        }
    }
}

/// Omitted fields are left alone; `description: null` clears it.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanRequest {
    pub name: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    pub monthly_price_usd: Option<f64>,
    pub max_ai_credits: Option<i32>,
    pub max_storage_mb: Option<i32>,
}

impl From<UpdatePlanRequest> for PlanPatch {
    fn from(dto: UpdatePlanRequest) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            monthly_price_usd: dto.monthly_price_usd,
            max_ai_credits: dto.max_ai_credits,
            max_storage_mb: dto.max_storage_mb,
        }
    }
}

// ── Handlers ────────────────────────────────────────────

/// List plans, cheapest first
#[utoipa::path(
    get,
    path = "/api/billing/plans",
    tag = "billing",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Plans", body = inline(SuccessResponse<Vec<PlanResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/billing/plans")]
pub async fn list_plans_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.billing.list_plans.execute().await {
        Ok(plans) => ApiResponse::success(
            plans
                .into_iter()
                .map(PlanResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!("Listing plans failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Create a plan (admin)
#[utoipa::path(
    post,
    path = "/api/billing/plans",
    tag = "billing",
    security(("bearer_auth" = [])),
    request_body = CreatePlanRequest,
    responses(
        (status = 201, description = "Plan created", body = inline(SuccessResponse<PlanResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
        (status = 409, description = "Plan name taken", body = ErrorResponse),
    )
)]
#[post("/api/billing/plans")]
pub async fn create_plan_handler(
    user: AuthenticatedUser,
    req: web::Json<CreatePlanRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&data, &user).await {
        return resp;
    }

    match data.billing.create_plan.execute(req.into_inner().into()).await {
        Ok(plan) => {
            info!(admin_id = %user.user_id, plan_id = %plan.id, "Admin created plan");
            ApiResponse::created(PlanResponse::from(plan))
        }
        Err(CreatePlanError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(CreatePlanError::NameTaken) => {
            warn!(admin_id = %user.user_id, "Plan name already in use");
            ApiResponse::fail(ErrorCode::PlanNameTaken, "A plan with this name already exists")
        }
        Err(CreatePlanError::RepositoryError(msg)) => {
            error!("Creating plan failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Update a plan (admin)
#[utoipa::path(
    patch,
    path = "/api/billing/plans/{id}",
    tag = "billing",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Plan id")),
    request_body = UpdatePlanRequest,
    responses(
        (status = 200, description = "Plan updated", body = inline(SuccessResponse<PlanResponse>)),
        (status = 403, description = "Not an administrator", body = ErrorResponse),
        (status = 404, description = "Plan not found", body = ErrorResponse),
        (status = 409, description = "Plan name taken", body = ErrorResponse),
    )
)]
#[patch("/api/billing/plans/{id}")]
pub async fn update_plan_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePlanRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = require_admin(&data, &user).await {
        return resp;
    }

    let plan_id = path.into_inner();

    match data
        .billing
        .update_plan
        .execute(plan_id, req.into_inner().into())
        .await
    {
        Ok(plan) => ApiResponse::success(PlanResponse::from(plan)),
        Err(UpdatePlanError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(UpdatePlanError::PlanNotFound) => {
            ApiResponse::fail(ErrorCode::PlanNotFound, "Plan not found")
        }
        Err(UpdatePlanError::NameTaken) => {
            ApiResponse::fail(ErrorCode::PlanNameTaken, "A plan with this name already exists")
        }
        Err(UpdatePlanError::RepositoryError(msg)) => {
            error!(plan_id = %plan_id, "Updating plan failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
