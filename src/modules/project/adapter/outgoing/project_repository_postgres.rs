use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::sea_orm_entity::image_versions::ActiveModel as VersionActiveModel;
use super::sea_orm_entity::images::ActiveModel as ImageActiveModel;
use super::sea_orm_entity::projects::ActiveModel as ProjectActiveModel;
use crate::modules::project::application::domain::entities::{
    Image, ImageVersion, ImageWithVersions, Project, VersionType,
};
use crate::modules::project::application::ports::outgoing::{
    NewImage, NewProject, ProjectRepository, ProjectRepositoryError,
};

#[derive(Clone, Debug)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

/// Inserts one version row on any connection, so callers can run it inside their own transaction.
pub async fn insert_version<C: ConnectionTrait>(
    conn: &C,
    image_id: Uuid,
    version_type: VersionType,
    url: &str,
    now: DateTime<Utc>,
) -> Result<ImageVersion, DbErr> {
    let model = VersionActiveModel {
        id: Set(Uuid::new_v4()),
        image_id: Set(image_id),
        version_type: Set(version_type.as_str().to_string()),
        url: Set(url.to_string()),
        created_at: Set(now.fixed_offset()),
    }
    .insert(conn)
    .await?;

    ImageVersion::try_from(model).map_err(DbErr::Custom)
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let inserted = ProjectActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.value()),
            name: Set(data.name),
            client_name: Set(data.client_name),
            notes: Set(data.notes),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .map_err(db_error)?;

        Ok(Project::from(inserted))
    }

    async fn add_image(&self, data: NewImage) -> Result<ImageWithVersions, ProjectRepositoryError> {
        let now = Utc::now();
        let txn = self.db.begin().await.map_err(db_error)?;

        let image = ImageActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(data.project_id),
            label: Set(data.label),
            created_at: Set(now.fixed_offset()),
        }
        .insert(&txn)
        .await
        .map_err(db_error)?;

        let original =
            insert_version(&txn, image.id, VersionType::Original, &data.original_url, now)
                .await
                .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;
        debug!(
            image_id = %image.id,
            project_id = %data.project_id,
            "Image stored with original version"
        );

        Ok(ImageWithVersions {
            image: Image::from(image),
            versions: vec![original],
        })
    }
}
