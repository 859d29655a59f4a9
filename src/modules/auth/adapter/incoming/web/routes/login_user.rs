use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthSession, LoginCommand, LoginError,
};
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

/// Login request from client
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestDto {
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// Six-digit TOTP code, required once MFA is enabled
    #[schema(example = "123456")]
    pub mfa_code: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: Uuid,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "Jane Doe")]
    pub display_name: String,
    pub is_email_verified: bool,
    pub mfa_enabled: bool,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            display_name: profile.display_name,
            is_email_verified: profile.is_email_verified,
            mfa_enabled: profile.mfa_enabled,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthSessionResponse {
    /// HS256 bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user: UserProfileResponse,
}

impl From<AuthSession> for AuthSessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            user: session.user.into(),
        }
    }
}

/// User login
///
/// Verifies the password and, when MFA is enabled, the TOTP code.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AuthSessionResponse>)),
        (
            status = 401,
            description = "Bad credentials, or MFA code missing or wrong",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let email = dto.email.clone();

    let command = LoginCommand {
        email: dto.email,
        password: dto.password,
        mfa_code: dto.mfa_code,
    };

    match data.auth.login.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User logged in");
            ApiResponse::success(AuthSessionResponse::from(session))
        }

        Err(LoginError::InvalidCredentials) => {
            warn!(email = %email, "Login failed: invalid credentials");
            ApiResponse::fail(ErrorCode::InvalidCredentials, "Invalid email or password")
        }

        Err(LoginError::MfaRequired) => {
            ApiResponse::fail(ErrorCode::MfaRequired, "MFA code required")
        }

        Err(LoginError::MfaInvalid) => {
            warn!(email = %email, "Login failed: invalid MFA code");
            ApiResponse::fail(ErrorCode::MfaInvalid, "Invalid MFA code")
        }

        Err(LoginError::MfaMisconfigured) => {
            error!(email = %email, "MFA enabled without a stored secret");
            ApiResponse::fail(
                ErrorCode::MfaMisconfigured,
                "MFA is misconfigured for this account",
            )
        }

        Err(e @ (LoginError::RepositoryError(_) | LoginError::Internal(_))) => {
            error!(email = %email, "Login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
