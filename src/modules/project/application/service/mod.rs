pub mod add_image_service;
pub mod create_ad_copy_service;
pub mod create_project_service;
pub mod delete_ad_copy_service;
pub mod get_project_service;
pub mod list_ad_copies_service;
pub mod list_images_service;
pub mod list_projects_service;
pub mod update_ad_copy_service;
pub mod upload_images_service;

pub use add_image_service::AddImageService;
pub use create_ad_copy_service::CreateAdCopyService;
pub use create_project_service::CreateProjectService;
pub use delete_ad_copy_service::DeleteAdCopyService;
pub use get_project_service::GetProjectService;
pub use list_ad_copies_service::ListAdCopiesService;
pub use list_images_service::ListImagesService;
pub use list_projects_service::ListProjectsService;
pub use update_ad_copy_service::UpdateAdCopyService;
pub use upload_images_service::UploadImagesService;
