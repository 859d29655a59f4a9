use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    AddImageUseCase, CreateAdCopyUseCase, CreateProjectUseCase, DeleteAdCopyUseCase,
    GetProjectUseCase, ListAdCopiesUseCase, ListImagesUseCase, ListProjectsUseCase,
    UpdateAdCopyUseCase, UploadImagesUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub get: Arc<dyn GetProjectUseCase + Send + Sync>,
    pub add_image: Arc<dyn AddImageUseCase + Send + Sync>,
    pub list_images: Arc<dyn ListImagesUseCase + Send + Sync>,
    pub upload_images: Arc<dyn UploadImagesUseCase + Send + Sync>,
    pub list_ad_copies: Arc<dyn ListAdCopiesUseCase + Send + Sync>,
    pub create_ad_copy: Arc<dyn CreateAdCopyUseCase + Send + Sync>,
    pub update_ad_copy: Arc<dyn UpdateAdCopyUseCase + Send + Sync>,
    pub delete_ad_copy: Arc<dyn DeleteAdCopyUseCase + Send + Sync>,
}
