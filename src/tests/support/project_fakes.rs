//! In-memory catalogue and object storage.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::project::application::domain::entities::{
    AdCopy, Image, ImageVersion, ImageWithVersions, Project, VersionType,
};
use crate::modules::project::application::ports::outgoing::{
    AdCopyPatch, AdCopyRepository, AdCopyRepositoryError, NewAdCopy, NewImage, NewProject,
    ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::storage::application::ports::outgoing::{ObjectStorage, StorageError};

#[derive(Default)]
struct Catalogue {
    projects: HashMap<Uuid, Project>,
    images: Vec<ImageWithVersions>,
    ad_copies: Vec<AdCopy>,
}

#[derive(Clone, Default)]
pub struct InMemoryProjects {
    inner: Arc<Mutex<Catalogue>>,
    failing: Arc<Mutex<bool>>,
}

impl InMemoryProjects {
    /// Seeds a project owned by `owner`.
    pub fn project_for(&self, owner: UserId, name: &str) -> Project {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            user_id: owner,
            name: name.to_string(),
            client_name: None,
            notes: None,
            created_at: now,
            updated_at: now,
        };
        self.inner
            .lock()
            .unwrap()
            .projects
            .insert(project.id, project.clone());
        project
    }

    /// Seeds an image with an ORIGINAL version.
    pub fn image_in(&self, project_id: Uuid, url: &str) -> ImageWithVersions {
        let mut inner = self.inner.lock().unwrap();
        let image = Self::build_image(project_id, url, None, inner.images.len());
        inner.images.push(image.clone());
        image
    }

    /// Appends a derived version to an existing image.
    pub fn push_version(&self, image_id: Uuid, version: ImageVersion) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(image) = inner.images.iter_mut().find(|i| i.image.id == image_id) {
            image.versions.push(version);
        }
    }

    pub fn project(&self, project_id: Uuid) -> Option<Project> {
        self.inner.lock().unwrap().projects.get(&project_id).cloned()
    }

    /// URL of any stored version.
    pub fn version_url(&self, version_id: Uuid) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .images
            .iter()
            .flat_map(|i| i.versions.iter())
            .find(|v| v.id == version_id)
            .map(|v| v.url.clone())
    }

    pub fn images(&self) -> Vec<ImageWithVersions> {
        self.inner.lock().unwrap().images.clone()
    }

    /// Seeds an ad copy with fixed channel and description.
    pub fn ad_copy_in(&self, project_id: Uuid, title: &str) -> AdCopy {
        let mut inner = self.inner.lock().unwrap();
        let copy = Self::build_ad_copy(
            NewAdCopy {
                project_id,
                channel: "portal".to_string(),
                title: title.to_string(),
                description: "Bright rooms and a quiet street".to_string(),
                keywords: None,
            },
            inner.ad_copies.len(),
        );
        inner.ad_copies.push(copy.clone());
        copy
    }

    pub fn ad_copies(&self) -> Vec<AdCopy> {
        self.inner.lock().unwrap().ad_copies.clone()
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

    // Strictly increasing timestamps keep "newest first" deterministic.
    fn build_image(
        project_id: Uuid,
        url: &str,
        label: Option<String>,
        seq: usize,
    ) -> ImageWithVersions {
        let created_at = Utc::now() + Duration::milliseconds(seq as i64);
        let image_id = Uuid::new_v4();
        ImageWithVersions {
            image: Image {
                id: image_id,
                project_id,
                label,
                created_at,
            },
            versions: vec![ImageVersion {
                id: Uuid::new_v4(),
                image_id,
                version_type: VersionType::Original,
                url: url.to_string(),
                created_at,
            }],
        }
    }

    fn build_ad_copy(data: NewAdCopy, seq: usize) -> AdCopy {
        let created_at = Utc::now() + Duration::milliseconds(seq as i64);
        AdCopy {
            id: Uuid::new_v4(),
            project_id: data.project_id,
            channel: data.channel,
            title: data.title,
            description: data.description,
            keywords: data.keywords,
            created_at,
            updated_at: created_at,
        }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError> {
        self.check().map_err(ProjectRepositoryError::DatabaseError)?;
        let mut inner = self.inner.lock().unwrap();
        let now = Utc::now() + Duration::milliseconds(inner.projects.len() as i64);
        let project = Project {
            id: Uuid::new_v4(),
            user_id: data.owner,
            name: data.name,
            client_name: data.client_name,
            notes: data.notes,
            created_at: now,
            updated_at: now,
        };
        inner.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn add_image(&self, data: NewImage) -> Result<ImageWithVersions, ProjectRepositoryError> {
        self.check().map_err(ProjectRepositoryError::DatabaseError)?;
        let mut inner = self.inner.lock().unwrap();
        let image =
            Self::build_image(data.project_id, &data.original_url, data.label, inner.images.len());
        inner.images.push(image.clone());
        Ok(image)
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjects {
    async fn list_projects(&self, owner: UserId) -> Result<Vec<Project>, ProjectQueryError> {
        self.check().map_err(ProjectQueryError::DatabaseError)?;
        let mut projects: Vec<Project> = self
            .inner
            .lock()
            .unwrap()
            .projects
            .values()
            .filter(|p| p.user_id == owner)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn find_project(
        &self,
        owner: UserId,
        project_id: Uuid,
    ) -> Result<Option<Project>, ProjectQueryError> {
        self.check().map_err(ProjectQueryError::DatabaseError)?;
        Ok(self
            .inner
            .lock()
            .unwrap()
            .projects
            .get(&project_id)
            .filter(|p| p.user_id == owner)
            .cloned())
    }

    async fn list_images(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<ImageWithVersions>, ProjectQueryError> {
        self.check().map_err(ProjectQueryError::DatabaseError)?;
        let mut images: Vec<ImageWithVersions> = self
            .inner
            .lock()
            .unwrap()
            .images
            .iter()
            .filter(|i| i.image.project_id == project_id)
            .cloned()
            .collect();
        images.sort_by(|a, b| b.image.created_at.cmp(&a.image.created_at));
        Ok(images)
    }

    async fn image_ids_in_project(
        &self,
        project_id: Uuid,
        image_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, ProjectQueryError> {
        self.check().map_err(ProjectQueryError::DatabaseError)?;
        Ok(self
            .inner
            .lock()
            .unwrap()
            .images
            .iter()
            .filter(|i| i.image.project_id == project_id && image_ids.contains(&i.image.id))
            .map(|i| i.image.id)
            .collect())
    }

    async fn version_ids_in_project(
        &self,
        project_id: Uuid,
        version_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, ProjectQueryError> {
        self.check().map_err(ProjectQueryError::DatabaseError)?;
        Ok(self
            .inner
            .lock()
            .unwrap()
            .images
            .iter()
            .filter(|i| i.image.project_id == project_id)
            .flat_map(|i| i.versions.iter().map(|v| v.id))
            .filter(|id| version_ids.contains(id))
            .collect())
    }
}

#[async_trait]
impl AdCopyRepository for InMemoryProjects {
    async fn list_for_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<AdCopy>, AdCopyRepositoryError> {
        self.check().map_err(AdCopyRepositoryError::DatabaseError)?;
        let mut copies: Vec<AdCopy> = self
            .inner
            .lock()
            .unwrap()
            .ad_copies
            .iter()
            .filter(|c| c.project_id == project_id)
            .cloned()
            .collect();
        copies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(copies)
    }

    async fn create(&self, data: NewAdCopy) -> Result<AdCopy, AdCopyRepositoryError> {
        self.check().map_err(AdCopyRepositoryError::DatabaseError)?;
        let mut inner = self.inner.lock().unwrap();
        let copy = Self::build_ad_copy(data, inner.ad_copies.len());
        inner.ad_copies.push(copy.clone());
        Ok(copy)
    }

    async fn update(
        &self,
        project_id: Uuid,
        ad_copy_id: Uuid,
        patch: AdCopyPatch,
    ) -> Result<AdCopy, AdCopyRepositoryError> {
        self.check().map_err(AdCopyRepositoryError::DatabaseError)?;
        let mut inner = self.inner.lock().unwrap();
        let copy = inner
            .ad_copies
            .iter_mut()
            .find(|c| c.id == ad_copy_id && c.project_id == project_id)
            .ok_or(AdCopyRepositoryError::NotFound)?;

        if let Some(channel) = patch.channel {
            copy.channel = channel;
        }
        if let Some(title) = patch.title {
            copy.title = title;
        }
        if let Some(description) = patch.description {
            copy.description = description;
        }
        if let Some(keywords) = patch.keywords.into_update() {
            copy.keywords = keywords;
        }
        Ok(copy.clone())
    }

    async fn delete(
        &self,
        project_id: Uuid,
        ad_copy_id: Uuid,
    ) -> Result<(), AdCopyRepositoryError> {
        self.check().map_err(AdCopyRepositoryError::DatabaseError)?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.ad_copies.len();
        inner
            .ad_copies
            .retain(|c| !(c.id == ad_copy_id && c.project_id == project_id));
        if inner.ad_copies.len() == before {
            return Err(AdCopyRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ── Object storage ───────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub key: String,
    pub content_type: String,
    pub size: usize,
}

#[derive(Clone)]
pub struct RecordingStorage {
    objects: Arc<Mutex<Vec<StoredObject>>>,
    configured: bool,
}

impl Default for RecordingStorage {
    fn default() -> Self {
        Self {
            objects: Arc::new(Mutex::new(Vec::new())),
            configured: true,
        }
    }
}

impl RecordingStorage {
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for RecordingStorage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        if !self.configured {
            return Err(StorageError::NotConfigured);
        }
        self.objects.lock().unwrap().push(StoredObject {
            key: key.to_string(),
            content_type: content_type.to_string(),
            size: bytes.len(),
        });
        Ok(format!("https://test-bucket.s3.us-east-1.amazonaws.com/{}", key))
    }
}
