use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::listing::application::domain::entities::{
    Listing, ListingFields, ListingStatus,
};

/// `status` holds `DRAFT`, `PUBLISHED` or `ARCHIVED`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub project_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_country: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub area_sqm: Option<f64>,
    #[sea_orm(column_type = "Text")]
    pub status: String,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity",
        from = "Column::ProjectId",
        to = "crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
    #[sea_orm(has_many = "super::listing_media::Entity")]
    ListingMedia,
}

impl Related<crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::listing_media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListingMedia.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Listing {
    type Error = String;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id.into(),
            project_id: model.project_id,
            fields: ListingFields {
                title: model.title,
                description: model.description,
                price: model.price,
                currency: model.currency,
                location_city: model.location_city,
                location_state: model.location_state,
                location_country: model.location_country,
                property_type: model.property_type,
                bedrooms: model.bedrooms,
                bathrooms: model.bathrooms,
                area_sqm: model.area_sqm,
            },
            status: model.status.parse::<ListingStatus>()?,
            is_published: model.is_published,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
