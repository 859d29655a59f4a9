pub mod image_versions;
pub mod images;
pub mod project_ad_copies;
pub mod projects;
