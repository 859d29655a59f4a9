mod ad_copies;
mod images;
mod projects;
mod upload;

use actix_web::web;

pub use ad_copies::{
    create_ad_copy_handler, delete_ad_copy_handler, list_ad_copies_handler,
    update_ad_copy_handler, AdCopyDeletedResponse, AdCopyResponse, CreateAdCopyRequest,
    UpdateAdCopyRequest,
};
pub use images::{
    add_image_handler, list_images_handler, AddImageRequest, ImageResponse, ImageVersionResponse,
};
pub use projects::{
    create_project_handler, get_project_handler, list_projects_handler, CreateProjectRequest,
    ProjectDetailResponse, ProjectResponse,
};
pub use upload::{
    upload_image_handler, upload_images_handler, UploadImageForm, UploadImageRequest,
    UploadImagesForm, UploadImagesRequest,
};

pub use ad_copies::{__path_create_ad_copy_handler, __path_delete_ad_copy_handler, __path_list_ad_copies_handler, __path_update_ad_copy_handler};
pub use images::{__path_add_image_handler, __path_list_images_handler};
pub use projects::{__path_create_project_handler, __path_get_project_handler, __path_list_projects_handler};
pub use upload::{__path_upload_image_handler, __path_upload_images_handler};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_projects_handler)
        .service(create_project_handler)
        .service(get_project_handler)
        .service(list_ad_copies_handler)
        .service(create_ad_copy_handler)
        .service(update_ad_copy_handler)
        .service(delete_ad_copy_handler)
        .service(list_images_handler)
        .service(add_image_handler)
        .service(upload_image_handler)
        .service(upload_images_handler);
}
