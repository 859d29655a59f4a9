//! In-memory listings backed by an [`InMemoryProjects`] catalogue.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::project_fakes::InMemoryProjects;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::{
    Listing, ListingFields, ListingMedia, ListingStatus, ListingWithMedia, MarketplaceDetail,
    MarketplaceFilter, ProjectSummary,
};
use crate::modules::listing::application::domain::media_plan::MediaSlot;
use crate::modules::listing::application::ports::outgoing::{
    ListingPatch, ListingQuery, ListingQueryError, ListingRepository, ListingRepositoryError,
    NewListing,
};

#[derive(Default)]
struct Store {
    listings: HashMap<Uuid, Listing>,
    media: Vec<ListingMedia>,
}

#[derive(Clone)]
pub struct InMemoryListings {
    inner: Arc<Mutex<Store>>,
    projects: InMemoryProjects,
    failing: Arc<Mutex<bool>>,
}

impl InMemoryListings {
    pub fn new(projects: InMemoryProjects) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Store::default())),
            projects,
            failing: Arc::new(Mutex::new(false)),
        }
    }

    /// Seeds a listing with the given status.
    pub fn seed(
        &self,
        owner: UserId,
        project_id: Uuid,
        title: &str,
        status: ListingStatus,
    ) -> Listing {
        let mut inner = self.inner.lock().unwrap();
        let listing = Self::build(
            owner,
            project_id,
            ListingFields {
                title: title.to_string(),
                ..Default::default()
            },
            inner.listings.len(),
        );
        let listing = Listing {
            status,
            is_published: status.is_published(),
            ..listing
        };
        inner.listings.insert(listing.id, listing.clone());
        listing
    }

    /// Seeds fields directly, bypassing validation.
    pub fn set_fields(&self, listing_id: Uuid, fields: ListingFields) {
        if let Some(listing) = self.inner.lock().unwrap().listings.get_mut(&listing_id) {
            listing.fields = fields;
        }
    }

    pub fn get(&self, listing_id: Uuid) -> Option<Listing> {
        self.inner.lock().unwrap().listings.get(&listing_id).cloned()
    }

    pub fn media_of(&self, listing_id: Uuid) -> Vec<ListingMedia> {
        let mut media: Vec<ListingMedia> = self
            .inner
            .lock()
            .unwrap()
            .media
            .iter()
            .filter(|m| m.listing_id == listing_id)
            .cloned()
            .collect();
        media.sort_by_key(|m| m.sort_order);
        media
    }

    pub fn fail_all(&self) {
        *self.failing.lock().unwrap() = true;
    }

    fn check(&self) -> Result<(), String> {
        if *self.failing.lock().unwrap() {
            return Err("db down".to_string());
        }
        Ok(())
    }

    fn build(owner: UserId, project_id: Uuid, fields: ListingFields, seq: usize) -> Listing {
        let now = Utc::now() + Duration::milliseconds(seq as i64);
        Listing {
            id: Uuid::new_v4(),
            user_id: owner,
            project_id,
            fields,
            status: ListingStatus::Draft,
            is_published: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn materialize(&self, listing_id: Uuid, slots: Vec<MediaSlot>) -> Vec<ListingMedia> {
        slots
            .into_iter()
            .map(|slot| ListingMedia {
                id: Uuid::new_v4(),
                listing_id,
                image_version_id: slot.image_version_id,
                url: self
                    .projects
                    .version_url(slot.image_version_id)
                    .unwrap_or_default(),
                sort_order: slot.sort_order,
                is_hero: slot.is_hero,
            })
            .collect()
    }

    fn matches(filter: &MarketplaceFilter, fields: &ListingFields) -> bool {
        let eq = |wanted: &Option<String>, actual: &Option<String>| match wanted {
            Some(w) => actual.as_deref() == Some(w.as_str()),
            None => true,
        };
        eq(&filter.city, &fields.location_city)
            && eq(&filter.country, &fields.location_country)
            && filter
                .min_price
                .map_or(true, |min| fields.price.is_some_and(|p| p >= min))
            && filter
                .max_price
                .map_or(true, |max| fields.price.is_some_and(|p| p <= max))
            && filter
                .bedrooms
                .map_or(true, |wanted| fields.bedrooms == Some(wanted))
    }
}

#[async_trait]
impl ListingRepository for InMemoryListings {
    async fn create_listing(&self, data: NewListing) -> Result<Listing, ListingRepositoryError> {
        self.check().map_err(ListingRepositoryError::DatabaseError)?;
        let mut inner = self.inner.lock().unwrap();
        let listing = Self::build(data.owner, data.project_id, data.fields, inner.listings.len());
        inner.listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn create_with_media(
        &self,
        data: NewListing,
        media: Vec<MediaSlot>,
    ) -> Result<ListingWithMedia, ListingRepositoryError> {
        let listing = self.create_listing(data).await?;
        let media = self.materialize(listing.id, media);
        self.inner.lock().unwrap().media.extend(media.clone());
        Ok(ListingWithMedia { listing, media })
    }

    async fn update_listing(
        &self,
        owner: UserId,
        listing_id: Uuid,
        patch: ListingPatch,
    ) -> Result<Listing, ListingRepositoryError> {
        self.check().map_err(ListingRepositoryError::DatabaseError)?;
        let mut inner = self.inner.lock().unwrap();
        let listing = inner
            .listings
            .get_mut(&listing_id)
            .filter(|l| l.user_id == owner)
            .ok_or(ListingRepositoryError::NotFound)?;

        if patch.is_empty() {
            return Ok(listing.clone());
        }

        let fields = &mut listing.fields;
        if let Some(title) = patch.title {
            fields.title = title;
        }
        if let Some(v) = patch.description.into_update() {
            fields.description = v;
        }
        if let Some(v) = patch.price.into_update() {
            fields.price = v;
        }
        if let Some(v) = patch.currency.into_update() {
            fields.currency = v;
        }
        if let Some(v) = patch.location_city.into_update() {
            fields.location_city = v;
        }
        if let Some(v) = patch.location_state.into_update() {
            fields.location_state = v;
        }
        if let Some(v) = patch.location_country.into_update() {
            fields.location_country = v;
        }
        if let Some(v) = patch.property_type.into_update() {
            fields.property_type = v;
        }
        if let Some(v) = patch.bedrooms.into_update() {
            fields.bedrooms = v;
        }
        if let Some(v) = patch.bathrooms.into_update() {
            fields.bathrooms = v;
        }
        if let Some(v) = patch.area_sqm.into_update() {
            fields.area_sqm = v;
        }
        if let Some(status) = patch.status {
            listing.status = status;
            listing.is_published = status.is_published();
        }
        listing.updated_at = Utc::now();
        Ok(listing.clone())
    }

    async fn replace_media(
        &self,
        listing_id: Uuid,
        media: Vec<MediaSlot>,
    ) -> Result<Vec<ListingMedia>, ListingRepositoryError> {
        self.check().map_err(ListingRepositoryError::DatabaseError)?;
        let media = self.materialize(listing_id, media);
        let mut inner = self.inner.lock().unwrap();
        inner.media.retain(|m| m.listing_id != listing_id);
        inner.media.extend(media.clone());
        Ok(media)
    }
}

#[async_trait]
impl ListingQuery for InMemoryListings {
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Listing>, ListingQueryError> {
        self.check().map_err(ListingQueryError::DatabaseError)?;
        let mut listings: Vec<Listing> = self
            .inner
            .lock()
            .unwrap()
            .listings
            .values()
            .filter(|l| l.user_id == owner)
            .cloned()
            .collect();
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listings)
    }

    async fn find_for_owner(
        &self,
        owner: UserId,
        listing_id: Uuid,
    ) -> Result<Option<ListingWithMedia>, ListingQueryError> {
        self.check().map_err(ListingQueryError::DatabaseError)?;
        Ok(self
            .get(listing_id)
            .filter(|l| l.user_id == owner)
            .map(|listing| ListingWithMedia {
                media: self.media_of(listing.id),
                listing,
            }))
    }

    async fn list_published(
        &self,
        filter: MarketplaceFilter,
    ) -> Result<Vec<ListingWithMedia>, ListingQueryError> {
        self.check().map_err(ListingQueryError::DatabaseError)?;
        let mut listings: Vec<Listing> = self
            .inner
            .lock()
            .unwrap()
            .listings
            .values()
            .filter(|l| l.is_published && Self::matches(&filter, &l.fields))
            .cloned()
            .collect();
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(listings
            .into_iter()
            .map(|listing| ListingWithMedia {
                media: self
                    .media_of(listing.id)
                    .into_iter()
                    .filter(|m| m.is_hero)
                    .collect(),
                listing,
            })
            .collect())
    }

    async fn find_published(
        &self,
        listing_id: Uuid,
    ) -> Result<Option<MarketplaceDetail>, ListingQueryError> {
        self.check().map_err(ListingQueryError::DatabaseError)?;
        let Some(listing) = self.get(listing_id).filter(|l| l.is_published) else {
            return Ok(None);
        };
        let project = self.projects.project(listing.project_id).map(|p| ProjectSummary {
            id: p.id,
            name: p.name,
        });
        Ok(Some(MarketplaceDetail {
            listing: ListingWithMedia {
                media: self.media_of(listing.id),
                listing,
            },
            project,
        }))
    }
}
