use crate::shared::api::ApiResponse;
use actix_multipart::form::MultipartFormConfig;
use actix_web::web::JsonConfig;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(err, ApiResponse::bad_request(&message))
            .into()
    })
}

/// Size limits for multipart image uploads; form errors use the JSON envelope.
pub fn upload_form_config(limit_bytes: usize) -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(limit_bytes)
        .memory_limit(limit_bytes)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(err, ApiResponse::bad_request(&message))
                .into()
        })
}
