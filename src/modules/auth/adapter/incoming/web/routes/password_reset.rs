use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use super::verify_email::{EmailRequest, MessageResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::use_cases::{
    RequestPasswordResetError, ResetPasswordCommand, ResetPasswordError,
};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

const RESET_REQUESTED: &str = "If that address is registered, a reset link has been sent";

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    /// Raw token from the reset link
    pub token: String,

    /// At least 8 characters
    #[schema(example = "NewSecurePass123!")]
    pub new_password: String,
}

/// Request a password reset link
///
/// Always answers 200 for a well-formed address, registered or not.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = "auth",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Request accepted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Malformed email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/forgot-password")]
pub async fn forgot_password_handler(
    req: web::Json<EmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.request_password_reset.execute(&req.email).await {
        Ok(()) => ApiResponse::success(MessageResponse::new(RESET_REQUESTED)),

        Err(RequestPasswordResetError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),

        Err(RequestPasswordResetError::RepositoryError(msg)) => {
            error!("Password reset request failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Set a new password with a reset token
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = "auth",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Weak password, or token unknown, used or expired", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = ResetPasswordCommand {
        token: dto.token,
        new_password: dto.new_password,
    };

    match data.auth.reset_password.execute(command).await {
        Ok(()) => {
            info!("Password reset completed");
            ApiResponse::success(MessageResponse::new("Password has been reset"))
        }

        Err(ResetPasswordError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(ResetPasswordError::TokenInvalid) => {
            ApiResponse::fail(ErrorCode::TokenInvalid, "Reset token is invalid")
        }
        Err(ResetPasswordError::TokenUsed) => {
            ApiResponse::fail(ErrorCode::TokenUsed, "Reset token has already been used")
        }
        Err(ResetPasswordError::TokenExpired) => {
            ApiResponse::fail(ErrorCode::TokenExpired, "Reset token has expired")
        }

        Err(e @ ResetPasswordError::RepositoryError(_))
        | Err(e @ ResetPasswordError::Internal(_)) => {
            error!("Password reset failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
