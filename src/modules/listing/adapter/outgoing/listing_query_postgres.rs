use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::media_loader::load_media;
use super::sea_orm_entity::listings::{self, Column as ListingColumn, Entity as ListingEntity};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::{
    Listing, ListingWithMedia, MarketplaceDetail, MarketplaceFilter, ProjectSummary,
};
use crate::modules::listing::application::ports::outgoing::{ListingQuery, ListingQueryError};
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity as ProjectEntity;

#[derive(Clone, Debug)]
pub struct ListingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ListingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ListingQueryError {
    ListingQueryError::DatabaseError(e.to_string())
}

fn to_listing(model: listings::Model) -> Result<Listing, ListingQueryError> {
    Listing::try_from(model).map_err(ListingQueryError::DatabaseError)
}

/// Every filter is an exact match except the price bounds.
fn apply_filter(
    mut select: Select<ListingEntity>,
    filter: &MarketplaceFilter,
) -> Select<ListingEntity> {
    if let Some(city) = filter.city.as_deref() {
        select = select.filter(ListingColumn::LocationCity.eq(city));
    }
    if let Some(country) = filter.country.as_deref() {
        select = select.filter(ListingColumn::LocationCountry.eq(country));
    }
    if let Some(min) = filter.min_price {
        select = select.filter(ListingColumn::Price.gte(min));
    }
    if let Some(max) = filter.max_price {
        select = select.filter(ListingColumn::Price.lte(max));
    }
    if let Some(bedrooms) = filter.bedrooms {
        select = select.filter(ListingColumn::Bedrooms.eq(bedrooms));
    }
    select
}

impl ListingQueryPostgres {
    async fn with_media(
        &self,
        models: Vec<listings::Model>,
        hero_only: bool,
    ) -> Result<Vec<ListingWithMedia>, ListingQueryError> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut media = load_media(&*self.db, &ids, hero_only)
            .await
            .map_err(map_db_err)?;

        models
            .into_iter()
            .map(|model| {
                let media = media.remove(&model.id).unwrap_or_default();
                Ok(ListingWithMedia {
                    listing: to_listing(model)?,
                    media,
                })
            })
            .collect()
    }
}

#[async_trait]
impl ListingQuery for ListingQueryPostgres {
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Listing>, ListingQueryError> {
        ListingEntity::find()
            .filter(ListingColumn::UserId.eq(owner.value()))
            .order_by_desc(ListingColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_listing)
            .collect()
    }

    async fn find_for_owner(
        &self,
        owner: UserId,
        listing_id: Uuid,
    ) -> Result<Option<ListingWithMedia>, ListingQueryError> {
        let Some(model) = ListingEntity::find_by_id(listing_id)
            .filter(ListingColumn::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        Ok(self.with_media(vec![model], false).await?.pop())
    }

    async fn list_published(
        &self,
        filter: MarketplaceFilter,
    ) -> Result<Vec<ListingWithMedia>, ListingQueryError> {
        let select = ListingEntity::find().filter(ListingColumn::IsPublished.eq(true));
        let models = apply_filter(select, &filter)
            .order_by_desc(ListingColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_media(models, true).await
    }

    async fn find_published(
        &self,
        listing_id: Uuid,
    ) -> Result<Option<MarketplaceDetail>, ListingQueryError> {
        let Some(model) = ListingEntity::find_by_id(listing_id)
            .filter(ListingColumn::IsPublished.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let project = ProjectEntity::find_by_id(model.project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|p| ProjectSummary {
                id: p.id,
                name: p.name,
            });

        let Some(listing) = self.with_media(vec![model], false).await?.pop() else {
            return Ok(None);
        };
        Ok(Some(MarketplaceDetail { listing, project }))
    }
}
