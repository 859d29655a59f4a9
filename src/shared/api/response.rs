use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use super::ErrorCode;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    /// Builds the error envelope for a known condition.
    pub fn fail(code: ErrorCode, message: &str) -> HttpResponse {
        Self::error(code.status(), code.as_str(), message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::fail(ErrorCode::ValidationError, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::fail(ErrorCode::Internal, "An unexpected error occurred")
    }
}
