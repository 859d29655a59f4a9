use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    #[serde(skip)]
    pub user_id: UserId,
    pub name: String,
    pub client_name: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VersionType {
    Original,
    Enhanced,
}

impl VersionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionType::Original => "ORIGINAL",
            VersionType::Enhanced => "ENHANCED",
        }
    }
}

impl fmt::Display for VersionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ORIGINAL" => Ok(VersionType::Original),
            "ENHANCED" => Ok(VersionType::Enhanced),
            other => Err(format!("unknown image version type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageVersion {
    pub id: Uuid,
    pub image_id: Uuid,
    pub version_type: VersionType,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: Uuid,
    pub project_id: Uuid,
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An image and every version derived from it, oldest version first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageWithVersions {
    #[serde(flatten)]
    pub image: Image,
    pub versions: Vec<ImageVersion>,
}

impl ImageWithVersions {
    pub fn original(&self) -> Option<&ImageVersion> {
        self.versions
            .iter()
            .find(|v| v.version_type == VersionType::Original)
    }
}

/// Marketing text written for one channel (portal, social, print).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdCopy {
    pub id: Uuid,
    pub project_id: Uuid,
    pub channel: String,
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A project as its owner sees it, with the ad copies written for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    pub ad_copies: Vec<AdCopy>,
}
