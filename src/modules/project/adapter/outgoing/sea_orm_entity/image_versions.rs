use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{ImageVersion, VersionType};

/// `version_type` holds `ORIGINAL` or `ENHANCED`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "image_versions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub version_type: String,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::images::Entity",
        from = "Column::ImageId",
        to = "super::images::Column::Id",
        on_delete = "Cascade"
    )]
    Image,
}

impl Related<super::images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ImageVersion {
    type Error = String;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            image_id: model.image_id,
            version_type: model.version_type.parse::<VersionType>()?,
            url: model.url,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        })
    }
}
