use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::enhancement::application::domain::entities::{EnhancementJob, JobStatus};

/// `status` holds `PENDING` or `COMPLETED`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enhancement_jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub image_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub status: String,
    pub result_version_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::project::adapter::outgoing::sea_orm_entity::images::Entity",
        from = "Column::ImageId",
        to = "crate::modules::project::adapter::outgoing::sea_orm_entity::images::Column::Id",
        on_delete = "Cascade"
    )]
    Image,
}

impl Related<crate::modules::project::adapter::outgoing::sea_orm_entity::images::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for EnhancementJob {
    type Error = String;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id.into(),
            project_id: model.project_id,
            image_id: model.image_id,
            status: model.status.parse::<JobStatus>()?,
            result_version_id: model.result_version_id,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
