//! Simulation video resolution state

/// File extension of lab simulation videos in object storage
pub const VIDEO_EXTENSION: &str = "mp4";

/// Object key a lab's simulation video is stored under
pub fn video_object_key(lab_id: &str) -> String {
    format!("{}.{}", lab_id, VIDEO_EXTENSION)
}

/// Outcome of looking up a lab's simulation video
///
/// `Unavailable` is an ordinary state with a retry affordance, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VideoState {
    #[default]
    Idle,
    Loading {
        object_key: String,
    },
    Ready {
        object_key: String,
        url: String,
    },
    Unavailable {
        object_key: String,
    },
}

impl VideoState {
    pub fn object_key(&self) -> Option<&str> {
        match self {
            VideoState::Idle => None,
            VideoState::Loading { object_key }
            | VideoState::Ready { object_key, .. }
            | VideoState::Unavailable { object_key } => Some(object_key),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            VideoState::Ready { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn is_retriable(&self) -> bool {
        matches!(self, VideoState::Unavailable { .. })
    }
}
