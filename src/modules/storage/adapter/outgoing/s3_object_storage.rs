use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::config::StorageConfig;
use crate::modules::storage::application::ports::outgoing::{ObjectStorage, StorageError};

/// S3 bucket backend. Credentials come from the default AWS provider chain.
#[derive(Clone)]
pub struct S3ObjectStorage {
    client: Option<Arc<Client>>,
    bucket: Option<String>,
    region: String,
}

impl S3ObjectStorage {
    pub async fn new(config: &StorageConfig) -> Self {
        let Some(bucket) = config.bucket.clone() else {
            warn!("AWS_S3_BUCKET is not set, uploads are disabled");
            return Self::unconfigured(&config.region);
        };

        info!(bucket = %bucket, region = %config.region, "Initializing S3 object storage");

        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        Self {
            client: Some(Arc::new(Client::new(&aws_config))),
            bucket: Some(bucket),
            region: config.region.clone(),
        }
    }

    pub fn unconfigured(region: &str) -> Self {
        Self {
            client: None,
            bucket: None,
            region: region.to_string(),
        }
    }

    pub fn public_url(bucket: &str, region: &str, key: &str) -> String {
        format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let (Some(client), Some(bucket)) = (&self.client, &self.bucket) else {
            return Err(StorageError::NotConfigured);
        };

        debug!(key = %key, size = bytes.len(), content_type = %content_type, "Uploading object");

        client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                error!(key = %key, "S3 upload failed: {}", e);
                StorageError::UploadFailed(e.to_string())
            })?;

        Ok(Self::public_url(bucket, &self.region, key))
    }
}
