use async_trait::async_trait;
use tracing::debug;

use crate::modules::project::application::domain::ad_copy_rules::{
    check_channel, normalize_keywords, required_text,
};
use crate::modules::project::application::domain::entities::AdCopy;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateAdCopyCommand, CreateAdCopyError, CreateAdCopyUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    AdCopyRepository, NewAdCopy, ProjectQuery,
};

pub struct CreateAdCopyService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    query: Q,
    ad_copies: A,
}

impl<Q, A> CreateAdCopyService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    pub fn new(query: Q, ad_copies: A) -> Self {
        Self { query, ad_copies }
    }
}

fn validate(command: &CreateAdCopyCommand) -> Result<NewAdCopy, String> {
    Ok(NewAdCopy {
        project_id: command.project_id,
        channel: check_channel(&command.channel)?,
        title: required_text("title", &command.title)?,
        description: required_text("description", &command.description)?,
        keywords: normalize_keywords(command.keywords.clone()),
    })
}

#[async_trait]
impl<Q, A> CreateAdCopyUseCase for CreateAdCopyService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    async fn execute(&self, command: CreateAdCopyCommand) -> Result<AdCopy, CreateAdCopyError> {
        let data = validate(&command).map_err(CreateAdCopyError::InvalidInput)?;

        self.query
            .find_project(command.owner, command.project_id)
            .await
            .map_err(|e| CreateAdCopyError::RepositoryError(e.to_string()))?
            .ok_or(CreateAdCopyError::ProjectNotFound)?;

        let ad_copy = self
            .ad_copies
            .create(data)
            .await
            .map_err(|e| CreateAdCopyError::RepositoryError(e.to_string()))?;

        debug!(project_id = %command.project_id, ad_copy_id = %ad_copy.id, "Ad copy created");
        Ok(ad_copy)
    }
}
