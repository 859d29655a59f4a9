use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    Draft,
    Published,
    Archived,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Draft => "DRAFT",
            ListingStatus::Published => "PUBLISHED",
            ListingStatus::Archived => "ARCHIVED",
        }
    }

    /// `is_published` always mirrors the status.
    pub fn is_published(&self) -> bool {
        matches!(self, ListingStatus::Published)
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(ListingStatus::Draft),
            "PUBLISHED" => Ok(ListingStatus::Published),
            "ARCHIVED" => Ok(ListingStatus::Archived),
            other => Err(format!("unknown listing status: {}", other)),
        }
    }
}

/// Descriptive fields shared by create and read paths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingFields {
    pub title: String,
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
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: Uuid,
    pub user_id: UserId,
    pub project_id: Uuid,
    pub fields: ListingFields,
    pub status: ListingStatus,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One image version placed on a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingMedia {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub image_version_id: Uuid,
    pub url: String,
    pub sort_order: i32,
    pub is_hero: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingWithMedia {
    pub listing: Listing,
    /// Ascending `sort_order`.
    pub media: Vec<ListingMedia>,
}

impl ListingWithMedia {
    pub fn hero(&self) -> Option<&ListingMedia> {
        self.media.iter().find(|m| m.is_hero)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub id: Uuid,
    pub name: String,
}

/// Public listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketplaceDetail {
    pub listing: ListingWithMedia,
    pub project: Option<ProjectSummary>,
}

/// Marketplace search. Every filter is optional and they combine with AND.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketplaceFilter {
    pub city: Option<String>,
    pub country: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// At least this many bedrooms.
    pub bedrooms: Option<i32>,
}
