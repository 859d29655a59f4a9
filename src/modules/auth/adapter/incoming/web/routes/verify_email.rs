use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::use_cases::{
    ResendVerificationError, VerifyEmailError,
};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct VerifyEmailRequest {
    /// Raw token from the verification link
    pub token: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct EmailRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Email verified")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Verify an email address
#[utoipa::path(
    post,
    path = "/api/auth/verify-email",
    tag = "auth",
    request_body = VerifyEmailRequest,
    responses(
        (status = 200, description = "Email verified", body = inline(SuccessResponse<MessageResponse>)),
        (
            status = 400,
            description = "Token unknown, already used or expired",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "TOKEN_EXPIRED", "message": "Verification token has expired" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/verify-email")]
pub async fn verify_email_handler(
    req: web::Json<VerifyEmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.verify_email.execute(&req.token).await {
        Ok(()) => {
            info!("Email verified");
            ApiResponse::success(MessageResponse::new("Email verified"))
        }

        Err(VerifyEmailError::TokenInvalid) => {
            warn!("Email verification with unknown token");
            ApiResponse::fail(ErrorCode::TokenInvalid, "Verification token is invalid")
        }
        Err(VerifyEmailError::TokenUsed) => ApiResponse::fail(
            ErrorCode::TokenUsed,
            "Verification token has already been used",
        ),
        Err(VerifyEmailError::TokenExpired) => {
            ApiResponse::fail(ErrorCode::TokenExpired, "Verification token has expired")
        }

        Err(VerifyEmailError::RepositoryError(msg)) => {
            error!("Email verification failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Send a fresh verification email
#[utoipa::path(
    post,
    path = "/api/auth/resend-verification",
    tag = "auth",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Verification email sent", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Already verified or invalid email", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/resend-verification")]
pub async fn resend_verification_handler(
    req: web::Json<EmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.resend_verification.execute(&req.email).await {
        Ok(()) => ApiResponse::success(MessageResponse::new("Verification email sent")),

        Err(ResendVerificationError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(ResendVerificationError::UserNotFound) => {
            ApiResponse::fail(ErrorCode::UserNotFound, "User not found")
        }
        Err(ResendVerificationError::AlreadyVerified) => {
            ApiResponse::fail(ErrorCode::AlreadyVerified, "Email is already verified")
        }

        Err(e @ ResendVerificationError::EmailDeliveryFailed(_))
        | Err(e @ ResendVerificationError::RepositoryError(_)) => {
            error!("Resending verification failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
