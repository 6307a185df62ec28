//! Object storage port
//!
//! Resolves public URLs for stored objects (lab simulation videos).

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while probing object storage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage request failed: {0}")]
    RequestFailed(String),

    #[error("Object storage is not configured")]
    NotConfigured,
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Public URL for `object_key` in `bucket`.
    ///
    /// The URL may point to an object that does not exist; `None` means no
    /// URL could be formed at all.
    fn public_url(&self, bucket: &str, object_key: &str) -> Option<String>;

    /// Check that a resolved URL can actually be played.
    ///
    /// The default assumes it can, leaving discovery to the player.
    async fn is_playable(&self, _url: &str) -> Result<bool, StorageError> {
        Ok(true)
    }
}
