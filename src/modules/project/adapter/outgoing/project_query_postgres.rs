use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::image_versions::{
    self, Column as VersionColumn, Entity as VersionEntity,
};
use super::sea_orm_entity::images::{Column as ImageColumn, Entity as ImageEntity};
use super::sea_orm_entity::projects::{Column as ProjectColumn, Entity as ProjectEntity};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::{
    Image, ImageVersion, ImageWithVersions, Project,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

#[derive(Clone, Debug)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_projects(&self, owner: UserId) -> Result<Vec<Project>, ProjectQueryError> {
        let models = ProjectEntity::find()
            .filter(ProjectColumn::UserId.eq(owner.value()))
            .order_by_desc(ProjectColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Project::from).collect())
    }

    async fn find_project(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<Option<Project>, ProjectQueryError> {
        let model = ProjectEntity::find_by_id(project_id)
            .filter(ProjectColumn::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Project::from))
    }

    async fn list_images(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<ImageWithVersions>, ProjectQueryError> {
        let images = ImageEntity::find()
            .filter(ImageColumn::ProjectId.eq(project_id))
            .order_by_desc(ImageColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if images.is_empty() {
            return Ok(Vec::new());
        }

        let image_ids: Vec<Uuid> = images.iter().map(|i| i.id).collect();
        let versions = VersionEntity::find()
            .filter(VersionColumn::ImageId.is_in(image_ids))
            .order_by_asc(VersionColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut by_image: HashMap<Uuid, Vec<ImageVersion>> = HashMap::new();
        for version in versions {
            let version =
                ImageVersion::try_from(version).map_err(ProjectQueryError::DatabaseError)?;
            by_image.entry(version.image_id).or_default().push(version);
        }

        Ok(images
            .into_iter()
            .map(|model| {
                let versions = by_image.remove(&model.id).unwrap_or_default();
                ImageWithVersions {
                    image: Image::from(model),
                    versions,
                }
            })
            .collect())
    }

    async fn image_ids_in_project(
        &self,
        project_id: Uuid,
        image_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, ProjectQueryError> {
        if image_ids.is_empty() {
            return Ok(Vec::new());
        }

        ImageEntity::find()
            .filter(ImageColumn::ProjectId.eq(project_id))
            .filter(ImageColumn::Id.is_in(image_ids.to_vec()))
            .select_only()
            .column(ImageColumn::Id)
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn version_ids_in_project(
        &self,
        project_id: Uuid,
        version_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, ProjectQueryError> {
        if version_ids.is_empty() {
            return Ok(Vec::new());
        }

        VersionEntity::find()
            .join(JoinType::InnerJoin, image_versions::Relation::Image.def())
            .filter(ImageColumn::ProjectId.eq(project_id))
            .filter(VersionColumn::Id.is_in(version_ids.to_vec()))
            .select_only()
            .column(VersionColumn::Id)
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }
}
