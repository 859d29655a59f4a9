use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::ad_copy_rules::{
    check_channel, normalize_keywords, required_text,
};
use crate::modules::project::application::domain::entities::AdCopy;
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateAdCopyError, UpdateAdCopyUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    AdCopyPatch, AdCopyRepository, AdCopyRepositoryError, ProjectQuery,
};
use crate::shared::patch::PatchField;

pub struct UpdateAdCopyService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    query: Q,
    ad_copies: A,
}

impl<Q, A> UpdateAdCopyService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    pub fn new(query: Q, ad_copies: A) -> Self {
        Self { query, ad_copies }
    }
}

fn normalize(patch: AdCopyPatch) -> Result<AdCopyPatch, String> {
    let keywords = match patch.keywords {
        PatchField::Value(k) => match normalize_keywords(Some(k)) {
            Some(k) => PatchField::Value(k),
            None => PatchField::Null,
        },
        other => other,
    };

    Ok(AdCopyPatch {
        channel: patch.channel.as_deref().map(check_channel).transpose()?,
        title: patch
            .title
            .as_deref()
            .map(|t| required_text("title", t))
            .transpose()?,
        description: patch
            .description
            .as_deref()
            .map(|d| required_text("description", d))
            .transpose()?,
        keywords,
    })
}

#[async_trait]
impl<Q, A> UpdateAdCopyUseCase for UpdateAdCopyService<Q, A>
where
    Q: ProjectQuery,
    A: AdCopyRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        project_id: Uuid,
        ad_copy_id: Uuid,
        patch: AdCopyPatch,
    ) -> Result<AdCopy, UpdateAdCopyError> {
        let patch = normalize(patch).map_err(UpdateAdCopyError::InvalidInput)?;

        self.query
            .find_project(owner, project_id)
            .await
            .map_err(|e| UpdateAdCopyError::RepositoryError(e.to_string()))?
            .ok_or(UpdateAdCopyError::AdCopyNotFound)?;

        self.ad_copies
            .update(project_id, ad_copy_id, patch)
            .await
            .map_err(|e| match e {
                AdCopyRepositoryError::NotFound => UpdateAdCopyError::AdCopyNotFound,
                other => UpdateAdCopyError::RepositoryError(other.to_string()),
            })
    }
}
