use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::login_user::AuthSessionResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// At least 8 characters
    #[schema(example = "SecurePass123!")]
    pub password: String,

    #[schema(example = "Jane Doe")]
    pub display_name: String,
}

/// Register a new account
///
/// Creates an unverified user, emails a verification link and returns a session.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<AuthSessionResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMAIL_TAKEN", "message": "Email is already registered" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = RegisterUserCommand {
        email: dto.email,
        password: dto.password,
        display_name: dto.display_name,
    };

    match data.auth.register.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "Registration completed");
            ApiResponse::created(AuthSessionResponse::from(session))
        }

        Err(RegisterUserError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),

        Err(RegisterUserError::EmailTaken) => {
            warn!("Registration refused: email taken");
            ApiResponse::fail(ErrorCode::EmailTaken, "Email is already registered")
        }

        Err(e @ RegisterUserError::EmailDeliveryFailed(_))
        | Err(e @ RegisterUserError::RepositoryError(_))
        | Err(e @ RegisterUserError::Internal(_)) => {
            error!("Registration failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
