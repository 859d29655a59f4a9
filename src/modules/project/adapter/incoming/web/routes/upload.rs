use actix_multipart::form::{bytes::Bytes as FilePart, text::Text, MultipartForm};
use actix_web::{post, web, Responder};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::images::ImageResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::upload::UploadFile;
use crate::modules::project::application::ports::incoming::use_cases::UploadImagesError;
use crate::shared::api::{ApiResponse, ErrorCode};
use crate::AppState;

/// `multipart/form-data` with one `file` part.
#[derive(MultipartForm)]
pub struct UploadImageForm {
    pub file: FilePart,
    pub label: Option<Text<String>>,
}

/// `multipart/form-data` with one or more `files` parts.
#[derive(MultipartForm)]
pub struct UploadImagesForm {
    pub files: Vec<FilePart>,
    pub label: Option<Text<String>>,
}

/// OpenAPI shape of [`UploadImageForm`].
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImageRequest {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Defaults to the file name
    pub label: Option<String>,
}

/// OpenAPI shape of [`UploadImagesForm`].
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImagesRequest {
    #[schema(value_type = Vec<String>, format = Binary)]
    pub files: Vec<Vec<u8>>,
    /// Applied to every image; defaults to each file name
    pub label: Option<String>,
}

fn upload_file(part: FilePart, label: Option<String>) -> UploadFile {
    UploadFile {
        file_name: part.file_name.unwrap_or_else(|| "upload".to_string()),
        content_type: part
            .content_type
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string()),
        bytes: part.data.to_vec(),
        label,
    }
}

fn label_of(label: Option<Text<String>>) -> Option<String> {
    label
        .map(Text::into_inner)
        .filter(|label| !label.trim().is_empty())
}

async fn run_upload(
    data: &AppState,
    owner: UserId,
    project_id: Uuid,
    files: Vec<UploadFile>,
) -> actix_web::HttpResponse {
    match data
        .project
        .upload_images
        .execute(owner, project_id, files)
        .await
    {
        Ok(images) => ApiResponse::created(
            images
                .into_iter()
                .map(ImageResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(UploadImagesError::InvalidInput(msg)) => ApiResponse::bad_request(&msg),
        Err(UploadImagesError::ProjectNotFound) => {
            ApiResponse::fail(ErrorCode::ProjectNotFound, "Project not found")
        }
        Err(UploadImagesError::StorageNotConfigured) => {
            error!("Upload attempted without object storage configured");
            ApiResponse::fail(
                ErrorCode::StorageNotConfigured,
                "Object storage is not configured",
            )
        }
        Err(e @ UploadImagesError::StorageFailed(_))
        | Err(e @ UploadImagesError::RepositoryError(_)) => {
            error!(project_id = %project_id, "Upload failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Upload one image as the `file` part of a multipart form
#[utoipa::path(
    post,
    path = "/api/projects/{id}/images/upload",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    request_body(content = UploadImageRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Uploaded image", body = inline(SuccessResponse<Vec<ImageResponse>>)),
        (status = 400, description = "Missing file part, empty file or not an image", body = ErrorResponse),
        (status = 404, description = "Project missing or not yours", body = ErrorResponse),
        (status = 500, description = "Storage not configured", body = ErrorResponse),
    )
)]
#[post("/api/projects/{id}/images/upload")]
pub async fn upload_image_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    MultipartForm(form): MultipartForm<UploadImageForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let file = upload_file(form.file, label_of(form.label));

    run_upload(&data, user.user_id, path.into_inner(), vec![file]).await
}

/// Upload several images as repeated `files` parts of a multipart form
///
/// Every file is checked before any is stored.
#[utoipa::path(
    post,
    path = "/api/projects/{id}/images/upload-multiple",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    request_body(content = UploadImagesRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Uploaded images in request order", body = inline(SuccessResponse<Vec<ImageResponse>>)),
        (status = 400, description = "No files or a non-image file", body = ErrorResponse),
        (status = 404, description = "Project missing or not yours", body = ErrorResponse),
        (status = 500, description = "Storage not configured", body = ErrorResponse),
    )
)]
#[post("/api/projects/{id}/images/upload-multiple")]
pub async fn upload_images_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    MultipartForm(form): MultipartForm<UploadImagesForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let label = label_of(form.label);
    let files = form
        .files
        .into_iter()
        .map(|part| upload_file(part, label.clone()))
        .collect();

    run_upload(&data, user.user_id, path.into_inner(), files).await
}
