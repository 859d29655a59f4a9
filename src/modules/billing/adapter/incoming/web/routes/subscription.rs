use actix_web::{get, post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::plans::PlanResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::billing::application::domain::entities::{SubscriptionWithPlan, UsageSummary};
use crate::modules::billing::application::ports::incoming::use_cases::{
    SubscribeError, UsageSummaryError,
};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub plan: PlanResponse,
}

impl From<SubscriptionWithPlan> for SubscriptionResponse {
    fn from(value: SubscriptionWithPlan) -> Self {
        let sub = value.subscription;
        Self {
            id: sub.id,
            plan_id: sub.plan_id,
            start_date: sub.start_date,
            end_date: sub.end_date,
            is_active: sub.is_active,
            created_at: sub.created_at,
            plan: value.plan.into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    pub plan_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreditUsageResponse {
    #[schema(example = 35)]
    pub used_credits: i64,
    /// Never below zero
    #[schema(example = 465)]
    pub remaining_credits: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsageResponse {
    pub subscription_id: Uuid,
    pub plan: PlanResponse,
    pub usage: CreditUsageResponse,
}

impl From<UsageSummary> for UsageResponse {
    fn from(summary: UsageSummary) -> Self {
        Self {
            subscription_id: summary.subscription_id,
            plan: summary.plan.into(),
            usage: CreditUsageResponse {
                used_credits: summary.used_credits,
                remaining_credits: summary.remaining_credits,
            },
        }
    }
}

/// Current active subscription
///
/// `data` is `null` when the caller has none.
#[utoipa::path(
    get,
    path = "/api/billing/me/subscription",
    tag = "billing",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active subscription or null", body = inline(SuccessResponse<Option<SubscriptionResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/billing/me/subscription")]
pub async fn my_subscription_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.billing.get_subscription.execute(user.user_id).await {
        Ok(active) => ApiResponse::success(active.map(SubscriptionResponse::from)),
        Err(e) => {
            error!(user_id = %user.user_id, "Loading subscription failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Subscribe to a plan, replacing the current one
#[utoipa::path(
    post,
    path = "/api/billing/subscribe",
    tag = "billing",
    security(("bearer_auth" = [])),
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscription active", body = inline(SuccessResponse<SubscriptionResponse>)),
        (status = 404, description = "Plan not found", body = ErrorResponse),
    )
)]
#[post("/api/billing/subscribe")]
pub async fn subscribe_handler(
    user: AuthenticatedUser,
    req: web::Json<SubscribeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.billing.subscribe.execute(user.user_id, req.plan_id).await {
        Ok(active) => ApiResponse::created(SubscriptionResponse::from(active)),
        Err(SubscribeError::PlanNotFound) => {
            ApiResponse::fail(ErrorCode::PlanNotFound, "Plan not found")
        }
        Err(SubscribeError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Subscribe failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Credit usage for the active subscription
#[utoipa::path(
    get,
    path = "/api/billing/me/usage",
    tag = "billing",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Usage summary", body = inline(SuccessResponse<UsageResponse>)),
        (status = 402, description = "No active subscription", body = ErrorResponse),
    )
)]
#[get("/api/billing/me/usage")]
pub async fn my_usage_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.billing.usage_summary.execute(user.user_id).await {
        Ok(summary) => ApiResponse::success(UsageResponse::from(summary)),
        Err(UsageSummaryError::NoActiveSubscription) => ApiResponse::fail(
            ErrorCode::NoActiveSubscription,
            "No active subscription",
        ),
        Err(UsageSummaryError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Usage summary failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
