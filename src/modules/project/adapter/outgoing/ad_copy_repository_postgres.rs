use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::project_ad_copies::{
    ActiveModel as AdCopyActiveModel, Column as AdCopyColumn, Entity as AdCopyEntity,
    Model as AdCopyModel,
};
use crate::modules::project::application::domain::entities::AdCopy;
use crate::modules::project::application::ports::outgoing::{
    AdCopyPatch, AdCopyRepository, AdCopyRepositoryError, NewAdCopy,
};

#[derive(Clone, Debug)]
pub struct AdCopyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdCopyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_scoped(
        &self,
        project_id: Uuid,
        ad_copy_id: Uuid,
    ) -> Result<AdCopyModel, AdCopyRepositoryError> {
        AdCopyEntity::find_by_id(ad_copy_id)
            .filter(AdCopyColumn::ProjectId.eq(project_id))
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(AdCopyRepositoryError::NotFound)
    }
}

fn db_error(e: DbErr) -> AdCopyRepositoryError {
    AdCopyRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl AdCopyRepository for AdCopyRepositoryPostgres {
    async fn list_for_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<AdCopy>, AdCopyRepositoryError> {
        let models = AdCopyEntity::find()
            .filter(AdCopyColumn::ProjectId.eq(project_id))
            .order_by_desc(AdCopyColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(AdCopy::from).collect())
    }

    async fn create(&self, data: NewAdCopy) -> Result<AdCopy, AdCopyRepositoryError> {
        let now = Utc::now().fixed_offset();

        let inserted = AdCopyActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(data.project_id),
            channel: Set(data.channel),
            title: Set(data.title),
            description: Set(data.description),
            keywords: Set(data.keywords),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .map_err(db_error)?;

        Ok(AdCopy::from(inserted))
    }

    async fn update(
        &self,
        project_id: Uuid,
        ad_copy_id: Uuid,
        patch: AdCopyPatch,
    ) -> Result<AdCopy, AdCopyRepositoryError> {
        let model = self.find_scoped(project_id, ad_copy_id).await?;

        if patch.is_empty() {
            return Ok(AdCopy::from(model));
        }

        let mut active = model.into_active_model();
        if let Some(channel) = patch.channel {
            active.channel = Set(channel);
        }
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(keywords) = patch.keywords.into_update() {
            active.keywords = Set(keywords);
        }
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(db_error)?;
        Ok(AdCopy::from(updated))
    }

    async fn delete(
        &self,
        project_id: Uuid,
        ad_copy_id: Uuid,
    ) -> Result<(), AdCopyRepositoryError> {
        let result = AdCopyEntity::delete_many()
            .filter(AdCopyColumn::Id.eq(ad_copy_id))
            .filter(AdCopyColumn::ProjectId.eq(project_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(AdCopyRepositoryError::NotFound);
        }
        Ok(())
    }
}
