use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::{error, warn};

use crate::modules::auth::application::domain::entities::{Role, UserId};
use crate::modules::auth::application::ports::incoming::use_cases::RequireRoleError;
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

/// Caller identity taken from a valid `Authorization: Bearer` access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                error!("Token provider is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::fail(
                    ErrorCode::Unauthenticated,
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: UserId::from(claims.sub),
                email: claims.email,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::fail(
                ErrorCode::InvalidOrExpiredToken,
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|s| s.to_string())
}

/// Fresh role lookup for admin-only handlers.
pub async fn require_admin(
    data: &web::Data<AppState>,
    user: &AuthenticatedUser,
) -> Result<(), HttpResponse> {
    match data.auth.require_role.execute(user.user_id, Role::Admin).await {
        Ok(()) => Ok(()),

        Err(RequireRoleError::Forbidden) => {
            warn!(user_id = %user.user_id, "Admin route refused");
            Err(ApiResponse::fail(
                ErrorCode::Forbidden,
                "Administrator role required",
            ))
        }

        Err(RequireRoleError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, "Role lookup failed: {}", msg);
            Err(ApiResponse::internal_error())
        }
    }
}
