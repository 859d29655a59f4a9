pub mod ad_copy_repository;
pub mod project_query;
pub mod project_repository;

pub use ad_copy_repository::{AdCopyPatch, AdCopyRepository, AdCopyRepositoryError, NewAdCopy};
pub use project_query::{ProjectQuery, ProjectQueryError};
pub use project_repository::{NewImage, NewProject, ProjectRepository, ProjectRepositoryError};
