//! Application-level configuration.
//!
//! Controls how use cases talk to their collaborators: where password-reset
//! links point, and which storage bucket lab videos live in.

/// Default bucket holding `<lab-id>.mp4` simulation videos
pub const DEFAULT_VIDEO_BUCKET: &str = "lab-videos";

/// Default page password-reset e-mails link back to
pub const DEFAULT_RESET_REDIRECT: &str = "http://localhost:5173/";

/// Application behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorConfig {
    /// Redirect target passed along with password-reset requests.
    pub reset_redirect: String,
    /// Storage bucket for lab simulation videos.
    pub video_bucket: String,
    /// Probe resolved video URLs before reporting them playable.
    pub verify_videos: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            reset_redirect: DEFAULT_RESET_REDIRECT.to_string(),
            video_bucket: DEFAULT_VIDEO_BUCKET.to_string(),
            verify_videos: false,
        }
    }
}

impl BehaviorConfig {
    pub fn with_reset_redirect(mut self, redirect: impl Into<String>) -> Self {
        self.reset_redirect = redirect.into();
        self
    }

    pub fn with_video_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.video_bucket = bucket.into();
        self
    }

    pub fn with_verify_videos(mut self, verify: bool) -> Self {
        self.verify_videos = verify;
        self
    }
}
