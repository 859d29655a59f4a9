use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::listing::application::domain::entities::Listing;
use crate::modules::listing::application::domain::listing_rules::{check_numbers, check_title};
use crate::modules::listing::application::ports::incoming::use_cases::{
    UpdateListingError, UpdateListingUseCase,
};
use crate::modules::listing::application::ports::outgoing::{
    ListingPatch, ListingRepository, ListingRepositoryError,
};
use crate::shared::patch::PatchField;

pub struct UpdateListingService<R>
where
    R: ListingRepository,
{
    repository: R,
}

impl<R> UpdateListingService<R>
where
    R: ListingRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn normalize(mut patch: ListingPatch) -> Result<ListingPatch, String> {
    if let Some(title) = patch.title.as_deref() {
        patch.title = Some(check_title(title)?);
    }
    check_numbers(
        patch.price.as_value().copied(),
        patch.bedrooms.as_value().copied(),
        patch.bathrooms.as_value().copied(),
        patch.area_sqm.as_value().copied(),
    )?;
    if let PatchField::Value(currency) = &patch.currency {
        patch.currency = PatchField::Value(currency.trim().to_uppercase());
    }
    Ok(patch)
}

#[async_trait]
impl<R> UpdateListingUseCase for UpdateListingService<R>
where
    R: ListingRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        listing_id: Uuid,
        patch: ListingPatch,
    ) -> Result<Listing, UpdateListingError> {
        let patch = normalize(patch).map_err(UpdateListingError::InvalidInput)?;
        let status_change = patch.status;

        let listing = self
            .repository
            .update_listing(owner, listing_id, patch)
            .await
            .map_err(|e| match e {
                ListingRepositoryError::NotFound => UpdateListingError::ListingNotFound,
                other => UpdateListingError::RepositoryError(other.to_string()),
            })?;

        if let Some(status) = status_change {
            info!(listing_id = %listing_id, status = %status, "Listing status changed");
        }
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::listing::application::domain::entities::{ListingFields, ListingStatus};
    use crate::tests::support::listing_fakes::InMemoryListings;
    use crate::tests::support::project_fakes::InMemoryProjects;

    fn seeded() -> (InMemoryListings, UserId, Listing) {
        let listings = InMemoryListings::new(InMemoryProjects::default());
        let me = UserId::from(Uuid::new_v4());
        let listing = listings.seed(me, Uuid::new_v4(), "Loft", ListingStatus::Draft);
        listings.set_fields(
            listing.id,
            ListingFields {
                title: "Loft".to_string(),
                description: Some("Bright".to_string()),
                price: Some(100.0),
                ..Default::default()
            },
        );
        (listings, me, listing)
    }

    #[tokio::test]
    async fn test_publishing_sets_flag() {
        let (listings, me, listing) = seeded();
        let patch = ListingPatch {
            status: Some(ListingStatus::Published),
            ..Default::default()
        };

        let updated = UpdateListingService::new(listings)
            .execute(me, listing.id, patch)
            .await
            .unwrap();

        assert_eq!(updated.status, ListingStatus::Published);
        assert!(updated.is_published);
    }

    #[tokio::test]
    async fn test_only_present_fields_change() {
        let (listings, me, listing) = seeded();
        let patch = ListingPatch {
            description: PatchField::Null,
            currency: PatchField::Value("eur".to_string()),
            ..Default::default()
        };

        let updated = UpdateListingService::new(listings)
            .execute(me, listing.id, patch)
            .await
            .unwrap();

        assert_eq!(updated.fields.description, None);
        assert_eq!(updated.fields.currency.as_deref(), Some("EUR"));
        assert_eq!(updated.fields.price, Some(100.0));
        assert_eq!(updated.fields.title, "Loft");
    }

    #[tokio::test]
    async fn test_invalid_values() {
        let (listings, me, listing) = seeded();
        let service = UpdateListingService::new(listings);

        let blank = ListingPatch {
            title: Some("  ".to_string()),
            ..Default::default()
        };
        let negative = ListingPatch {
            price: PatchField::Value(-5.0),
            ..Default::default()
        };

        assert!(matches!(
            service.execute(me, listing.id, blank).await,
            Err(UpdateListingError::InvalidInput(_))
        ));
        assert!(matches!(
            service.execute(me, listing.id, negative).await,
            Err(UpdateListingError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_foreign_listing() {
        let (listings, _, listing) = seeded();

        let result = UpdateListingService::new(listings)
            .execute(UserId::from(Uuid::new_v4()), listing.id, ListingPatch::default())
            .await;

        assert_eq!(result, Err(UpdateListingError::ListingNotFound));
    }
}
