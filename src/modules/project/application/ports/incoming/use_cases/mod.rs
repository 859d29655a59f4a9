pub mod add_image;
pub mod create_ad_copy;
pub mod create_project;
pub mod delete_ad_copy;
pub mod get_project;
pub mod list_ad_copies;
pub mod list_images;
pub mod list_projects;
pub mod update_ad_copy;
pub mod upload_images;

pub use add_image::{AddImageCommand, AddImageError, AddImageUseCase};
pub use create_ad_copy::{CreateAdCopyCommand, CreateAdCopyError, CreateAdCopyUseCase};
pub use create_project::{CreateProjectCommand, CreateProjectError, CreateProjectUseCase};
pub use delete_ad_copy::{DeleteAdCopyError, DeleteAdCopyUseCase};
pub use get_project::{GetProjectError, GetProjectUseCase};
pub use list_ad_copies::{ListAdCopiesError, ListAdCopiesUseCase};
pub use list_images::{ListImagesError, ListImagesUseCase};
pub use list_projects::{ListProjectsError, ListProjectsUseCase};
pub use update_ad_copy::{UpdateAdCopyError, UpdateAdCopyUseCase};
pub use upload_images::{UploadImagesError, UploadImagesUseCase};
