//! Virtual lab configuration from TOML (`[labs]` section)

use biogenie_application::config::DEFAULT_VIDEO_BUCKET;
use serde::{Deserialize, Serialize};

/// Raw labs configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLabsConfig {
    /// Storage bucket holding `<lab-id>.mp4` videos
    pub video_bucket: String,
    /// Probe video URLs before showing them as playable
    pub verify_videos: bool,
}

impl Default for FileLabsConfig {
    fn default() -> Self {
        Self {
            video_bucket: DEFAULT_VIDEO_BUCKET.to_string(),
            verify_videos: false,
        }
    }
}
