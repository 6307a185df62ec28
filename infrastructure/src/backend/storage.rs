//! Public object storage adapter
//!
//! Builds Supabase Storage public URLs
//! (`{url}/storage/v1/object/public/{bucket}/{key}`) and optionally probes
//! them with a `HEAD` request.

use super::error::{BackendError, Result};
use async_trait::async_trait;
use biogenie_application::{ObjectStorage, StorageError};
use std::time::Duration;
use tracing::debug;

/// [`ObjectStorage`] for public buckets
pub struct PublicObjectStorage {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl PublicObjectStorage {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BackendError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: Some(base_url.trim().trim_end_matches('/').to_string()),
        })
    }

    /// Storage with no backend; every video is unavailable
    pub fn unconfigured() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
        }
    }
}

#[async_trait]
impl ObjectStorage for PublicObjectStorage {
    fn public_url(&self, bucket: &str, object_key: &str) -> Option<String> {
        let base = self.base_url.as_deref()?;
        if bucket.is_empty() || object_key.is_empty() {
            return None;
        }
        Some(format!(
            "{}/storage/v1/object/public/{}/{}",
            base, bucket, object_key
        ))
    }

    async fn is_playable(&self, url: &str) -> std::result::Result<bool, StorageError> {
        if self.base_url.is_none() {
            return Err(StorageError::NotConfigured);
        }
        let response = self
            .http
            .head(url)
            .send()
            .await
            .map_err(BackendError::from)?;
        debug!("HEAD {} -> {}", url, response.status());
        Ok(response.status().is_success())
    }
}
