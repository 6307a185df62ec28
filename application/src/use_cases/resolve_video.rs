//! Resolve lab video use case
//!
//! Maps a lab to its simulation video (`<lab-id>.mp4` in the configured
//! bucket) and reports whether it can be played.

use crate::config::BehaviorConfig;
use crate::ports::object_storage::ObjectStorage;
use biogenie_domain::{VideoState, video_object_key};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ResolveLabVideoUseCase<S: ObjectStorage + 'static> {
    storage: Arc<S>,
    bucket: String,
    verify: bool,
}

impl<S: ObjectStorage + 'static> Clone for ResolveLabVideoUseCase<S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            bucket: self.bucket.clone(),
            verify: self.verify,
        }
    }
}

impl<S: ObjectStorage + 'static> ResolveLabVideoUseCase<S> {
    pub fn new(storage: Arc<S>, config: &BehaviorConfig) -> Self {
        Self {
            storage,
            bucket: config.video_bucket.clone(),
            verify: config.verify_videos,
        }
    }

    /// State to show while resolution is running
    pub fn loading(lab_id: &str) -> VideoState {
        VideoState::Loading {
            object_key: video_object_key(lab_id),
        }
    }

    /// Resolve the video for `lab_id`. Never fails: anything that prevents
    /// playback ends up as [`VideoState::Unavailable`].
    pub async fn execute(&self, lab_id: &str) -> VideoState {
        let object_key = video_object_key(lab_id);

        let Some(url) = self.storage.public_url(&self.bucket, &object_key) else {
            debug!("No public URL for {}/{}", self.bucket, object_key);
            return VideoState::Unavailable { object_key };
        };

        if self.verify {
            match self.storage.is_playable(&url).await {
                Ok(true) => {}
                Ok(false) => {
                    debug!("Video {} is not playable", url);
                    return VideoState::Unavailable { object_key };
                }
                Err(e) => {
                    warn!("Could not probe {}: {}", url, e);
                    return VideoState::Unavailable { object_key };
                }
            }
        }

        debug!("Resolved {} to {}", object_key, url);
        VideoState::Ready { object_key, url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::object_storage::StorageError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockStorage {
        base: Option<String>,
        playable: Result<bool, StorageError>,
        probed: Mutex<Vec<String>>,
    }

    impl MockStorage {
        fn new(base: Option<&str>, playable: Result<bool, StorageError>) -> Self {
            Self {
                base: base.map(str::to_string),
                playable,
                probed: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ObjectStorage for MockStorage {
        fn public_url(&self, bucket: &str, object_key: &str) -> Option<String> {
            self.base
                .as_ref()
                .map(|base| format!("{}/{}/{}", base, bucket, object_key))
        }

        async fn is_playable(&self, url: &str) -> Result<bool, StorageError> {
            self.probed.lock().unwrap().push(url.to_string());
            self.playable.clone()
        }
    }

    fn use_case(storage: MockStorage, verify: bool) -> ResolveLabVideoUseCase<MockStorage> {
        let config = BehaviorConfig::default()
            .with_video_bucket("videos")
            .with_verify_videos(verify);
        ResolveLabVideoUseCase::new(Arc::new(storage), &config)
    }

    #[tokio::test]
    async fn test_resolves_public_url_without_probe() {
        let uc = use_case(MockStorage::new(Some("https://cdn"), Ok(false)), false);

        let state = uc.execute("onion-peel").await;

        assert_eq!(
            state,
            VideoState::Ready {
                object_key: "onion-peel.mp4".into(),
                url: "https://cdn/videos/onion-peel.mp4".into(),
            }
        );
        assert!(uc.storage.probed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_storage_is_unavailable() {
        let uc = use_case(MockStorage::new(None, Ok(true)), true);
        let state = uc.execute("onion-peel").await;
        assert_eq!(
            state,
            VideoState::Unavailable {
                object_key: "onion-peel.mp4".into()
            }
        );
    }

    #[tokio::test]
    async fn test_failed_probe_is_unavailable() {
        let uc = use_case(
            MockStorage::new(
                Some("https://cdn"),
                Err(StorageError::RequestFailed("timeout".into())),
            ),
            true,
        );
        let state = uc.execute("dna-extraction").await;
        assert!(state.is_retriable());
        assert_eq!(state.object_key(), Some("dna-extraction.mp4"));
    }

    #[tokio::test]
    async fn test_missing_object_is_unavailable() {
        let uc = use_case(MockStorage::new(Some("https://cdn"), Ok(false)), true);
        let state = uc.execute("osmosis").await;
        assert!(matches!(state, VideoState::Unavailable { .. }));
        assert_eq!(uc.storage.probed.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_loading_state_names_object() {
        let state = ResolveLabVideoUseCase::<MockStorage>::loading("osmosis");
        assert_eq!(state.object_key(), Some("osmosis.mp4"));
    }
}
