use actix_web::{get, web, Responder};
use tracing::{error, warn};

use super::login_user::UserProfileResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::ports::incoming::use_cases::FetchProfileError;
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn me_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.fetch_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(UserProfileResponse::from(profile)),

        Err(FetchProfileError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Valid token for a missing user");
            ApiResponse::fail(ErrorCode::UserNotFound, "User not found")
        }

        Err(FetchProfileError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Fetching profile failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
