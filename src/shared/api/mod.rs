mod error_code;
mod json_config;
mod response;

pub use error_code::ErrorCode;
pub use json_config::{custom_json_config, upload_form_config};
pub use response::{ApiError, ApiResponse};
