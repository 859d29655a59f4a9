use async_trait::async_trait;
use tracing::info;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{NewProject, ProjectRepository};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

/// Blank optional text is stored as NULL.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository,
{
    async fn execute(&self, command: CreateProjectCommand) -> Result<Project, CreateProjectError> {
        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(CreateProjectError::InvalidInput(
                "name is required".to_string(),
            ));
        }

        let project = self
            .project_repository
            .create_project(NewProject {
                owner: command.owner,
                name,
                client_name: non_blank(command.client_name),
                notes: non_blank(command.notes),
            })
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))?;

        info!(project_id = %project.id, user_id = %command.owner, "Project created");
        Ok(project)
    }
}
