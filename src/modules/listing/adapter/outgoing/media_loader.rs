use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use uuid::Uuid;

use super::sea_orm_entity::listing_media::{Column as MediaColumn, Entity as MediaEntity};
use crate::modules::listing::application::domain::entities::ListingMedia;
use crate::modules::project::adapter::outgoing::sea_orm_entity::image_versions::{
    Column as VersionColumn, Entity as VersionEntity,
};

/// Galleries for `listing_ids`, keyed by listing, each sorted by `sort_order`.
///
/// URLs come from the referenced image versions. Two queries, none when `listing_ids` is empty.
pub async fn load_media<C: ConnectionTrait>(
    conn: &C,
    listing_ids: &[Uuid],
    hero_only: bool,
) -> Result<HashMap<Uuid, Vec<ListingMedia>>, DbErr> {
    let mut by_listing: HashMap<Uuid, Vec<ListingMedia>> = HashMap::new();
    if listing_ids.is_empty() {
        return Ok(by_listing);
    }

    let mut query = MediaEntity::find().filter(MediaColumn::ListingId.is_in(listing_ids.to_vec()));
    if hero_only {
        query = query.filter(MediaColumn::IsHero.eq(true));
    }
    let rows = query
        .order_by_asc(MediaColumn::SortOrder)
        .all(conn)
        .await?;

    if rows.is_empty() {
        return Ok(by_listing);
    }

    let version_ids: Vec<Uuid> = rows.iter().map(|m| m.image_version_id).collect();
    let urls: HashMap<Uuid, String> = VersionEntity::find()
        .filter(VersionColumn::Id.is_in(version_ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|v| (v.id, v.url))
        .collect();

    for row in rows {
        let url = urls.get(&row.image_version_id).cloned().ok_or_else(|| {
            DbErr::Custom(format!("image version {} has no row", row.image_version_id))
        })?;
        by_listing.entry(row.listing_id).or_default().push(ListingMedia {
            id: row.id,
            listing_id: row.listing_id,
            image_version_id: row.image_version_id,
            url,
            sort_order: row.sort_order,
            is_hero: row.is_hero,
        });
    }

    Ok(by_listing)
}
