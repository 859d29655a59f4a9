use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::media_loader::load_media;
use super::sea_orm_entity::listing_media::{
    ActiveModel as MediaActiveModel, Column as MediaColumn, Entity as MediaEntity,
};
use super::sea_orm_entity::listings::{
    ActiveModel as ListingActiveModel, Column as ListingColumn, Entity as ListingEntity,
};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::{
    Listing, ListingMedia, ListingStatus, ListingWithMedia,
};
use crate::modules::listing::application::domain::media_plan::MediaSlot;
use crate::modules::listing::application::ports::outgoing::{
    ListingPatch, ListingRepository, ListingRepositoryError, NewListing,
};

#[derive(Clone, Debug)]
pub struct ListingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ListingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> ListingRepositoryError {
    ListingRepositoryError::DatabaseError(e.to_string())
}

fn to_listing(
    model: super::sea_orm_entity::listings::Model,
) -> Result<Listing, ListingRepositoryError> {
    Listing::try_from(model).map_err(ListingRepositoryError::DatabaseError)
}

async fn insert_listing<C: ConnectionTrait>(
    conn: &C,
    data: NewListing,
) -> Result<Listing, ListingRepositoryError> {
    let now = Utc::now().fixed_offset();
    let fields = data.fields;
    let status = ListingStatus::Draft;

    let model = ListingActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(data.owner.value()),
        project_id: Set(data.project_id),
        title: Set(fields.title),
        description: Set(fields.description),
        price: Set(fields.price),
        currency: Set(fields.currency),
        location_city: Set(fields.location_city),
        location_state: Set(fields.location_state),
        location_country: Set(fields.location_country),
        property_type: Set(fields.property_type),
        bedrooms: Set(fields.bedrooms),
        bathrooms: Set(fields.bathrooms),
        area_sqm: Set(fields.area_sqm),
        status: Set(status.as_str().to_string()),
        is_published: Set(status.is_published()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
    .map_err(db_error)?;

    to_listing(model)
}

/// Writes `slots` for the listing and reads them back with URLs.
async fn write_media<C: ConnectionTrait>(
    conn: &C,
    listing_id: Uuid,
    slots: Vec<MediaSlot>,
) -> Result<Vec<ListingMedia>, DbErr> {
    if slots.is_empty() {
        return Ok(Vec::new());
    }

    let rows = slots.into_iter().map(|slot| MediaActiveModel {
        id: Set(Uuid::new_v4()),
        listing_id: Set(listing_id),
        image_version_id: Set(slot.image_version_id),
        sort_order: Set(slot.sort_order),
        is_hero: Set(slot.is_hero),
    });
    MediaEntity::insert_many(rows).exec_without_returning(conn).await?;

    let mut loaded = load_media(conn, &[listing_id], false).await?;
    Ok(loaded.remove(&listing_id).unwrap_or_default())
}

#[async_trait]
impl ListingRepository for ListingRepositoryPostgres {
    async fn create_listing(&self, data: NewListing) -> Result<Listing, ListingRepositoryError> {
        insert_listing(&*self.db, data).await
    }

    async fn create_with_media(
        &self,
        data: NewListing,
        media: Vec<MediaSlot>,
    ) -> Result<ListingWithMedia, ListingRepositoryError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let listing = insert_listing(&txn, data).await?;
        let media = write_media(&txn, listing.id, media).await.map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;
        debug!(listing_id = %listing.id, media = media.len(), "Listing stored with media");

        Ok(ListingWithMedia { listing, media })
    }

    async fn update_listing(
        &self,
        owner: UserId,
        listing_id: Uuid,
        patch: ListingPatch,
    ) -> Result<Listing, ListingRepositoryError> {
        let model = ListingEntity::find_by_id(listing_id)
            .filter(ListingColumn::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(ListingRepositoryError::NotFound)?;

        if patch.is_empty() {
            return to_listing(model);
        }

        let mut active = model.into_active_model();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(v) = patch.description.into_update() {
            active.description = Set(v);
        }
        if let Some(v) = patch.price.into_update() {
            active.price = Set(v);
        }
        if let Some(v) = patch.currency.into_update() {
            active.currency = Set(v);
        }
        if let Some(v) = patch.location_city.into_update() {
            active.location_city = Set(v);
        }
        if let Some(v) = patch.location_state.into_update() {
            active.location_state = Set(v);
        }
        if let Some(v) = patch.location_country.into_update() {
            active.location_country = Set(v);
        }
        if let Some(v) = patch.property_type.into_update() {
            active.property_type = Set(v);
        }
        if let Some(v) = patch.bedrooms.into_update() {
            active.bedrooms = Set(v);
        }
        if let Some(v) = patch.bathrooms.into_update() {
            active.bathrooms = Set(v);
        }
        if let Some(v) = patch.area_sqm.into_update() {
            active.area_sqm = Set(v);
        }
        if let Some(status) = patch.status {
            active.status = Set(status.as_str().to_string());
            active.is_published = Set(status.is_published());
        }
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(db_error)?;
        to_listing(updated)
    }

    async fn replace_media(
        &self,
        listing_id: Uuid,
        media: Vec<MediaSlot>,
    ) -> Result<Vec<ListingMedia>, ListingRepositoryError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let removed = MediaEntity::delete_many()
            .filter(MediaColumn::ListingId.eq(listing_id))
            .exec(&txn)
            .await
            .map_err(db_error)?;
        let media = write_media(&txn, listing_id, media).await.map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;
        debug!(
            listing_id = %listing_id,
            removed = removed.rows_affected,
            added = media.len(),
            "Listing gallery replaced"
        );

        Ok(media)
    }
}
