use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::verify_email::MessageResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::ports::incoming::use_cases::{
    DisableMfaError, EnableMfaError, MfaSetup, SetupMfaError,
};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MfaCodeRequest {
    #[schema(example = "123456")]
    pub code: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MfaSetupResponse {
    /// Base32 secret for manual entry
    #[schema(example = "JBSWY3DPEHPK3PXPJBSWY3DPEHPK3PXP")]
    pub secret: String,
    #[schema(example = "otpauth://totp/AIPIX%20%28jane%40example.com%29?secret=...&issuer=AIPIX")]
    pub otpauth_url: String,
}

impl From<MfaSetup> for MfaSetupResponse {
    fn from(setup: MfaSetup) -> Self {
        Self {
            secret: setup.secret,
            otpauth_url: setup.otpauth_url,
        }
    }
}

/// Generate a TOTP secret
#[utoipa::path(
    post,
    path = "/api/auth/mfa/setup",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Secret generated", body = inline(SuccessResponse<MfaSetupResponse>)),
        (status = 409, description = "MFA already enabled", body = ErrorResponse),
    )
)]
#[post("/api/auth/mfa/setup")]
pub async fn mfa_setup_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.setup_mfa.execute(user.user_id).await {
        Ok(setup) => ApiResponse::success(MfaSetupResponse::from(setup)),

        Err(SetupMfaError::UserNotFound) => {
            ApiResponse::fail(ErrorCode::UserNotFound, "User not found")
        }
        Err(SetupMfaError::MfaAlreadyEnabled) => {
            ApiResponse::fail(ErrorCode::MfaAlreadyEnabled, "MFA is already enabled")
        }
        Err(SetupMfaError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "MFA setup failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Turn MFA on after confirming a code
#[utoipa::path(
    post,
    path = "/api/auth/mfa/enable",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = MfaCodeRequest,
    responses(
        (status = 200, description = "MFA enabled", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "No secret set up", body = ErrorResponse),
        (status = 401, description = "Wrong code", body = ErrorResponse),
    )
)]
#[post("/api/auth/mfa/enable")]
pub async fn mfa_enable_handler(
    user: AuthenticatedUser,
    req: web::Json<MfaCodeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.enable_mfa.execute(user.user_id, &req.code).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "MFA enabled");
            ApiResponse::success(MessageResponse::new("MFA enabled"))
        }

        Err(EnableMfaError::UserNotFound) => {
            ApiResponse::fail(ErrorCode::UserNotFound, "User not found")
        }
        Err(EnableMfaError::MfaNotSetup) => {
            ApiResponse::fail(ErrorCode::MfaNotSetup, "Run MFA setup first")
        }
        Err(EnableMfaError::MfaInvalid) => {
            warn!(user_id = %user.user_id, "MFA enable with wrong code");
            ApiResponse::fail(ErrorCode::MfaInvalid, "Invalid MFA code")
        }
        Err(EnableMfaError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Enabling MFA failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Turn MFA off
#[utoipa::path(
    post,
    path = "/api/auth/mfa/disable",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = MfaCodeRequest,
    responses(
        (status = 200, description = "MFA disabled", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "MFA is not enabled", body = ErrorResponse),
        (status = 401, description = "Wrong code", body = ErrorResponse),
    )
)]
#[post("/api/auth/mfa/disable")]
pub async fn mfa_disable_handler(
    user: AuthenticatedUser,
    req: web::Json<MfaCodeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.disable_mfa.execute(user.user_id, &req.code).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "MFA disabled");
            ApiResponse::success(MessageResponse::new("MFA disabled"))
        }

        Err(DisableMfaError::UserNotFound) => {
            ApiResponse::fail(ErrorCode::UserNotFound, "User not found")
        }
        Err(DisableMfaError::MfaNotEnabled) => {
            ApiResponse::fail(ErrorCode::MfaNotSetup, "MFA is not enabled")
        }
        Err(DisableMfaError::MfaInvalid) => {
            warn!(user_id = %user.user_id, "MFA disable with wrong code");
            ApiResponse::fail(ErrorCode::MfaInvalid, "Invalid MFA code")
        }
        Err(DisableMfaError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Disabling MFA failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
