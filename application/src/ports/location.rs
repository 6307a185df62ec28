//! Startup location port
//!
//! Exposes the fragment of the URL the client was opened with, used to
//! detect password-recovery deep links.

use std::sync::Mutex;

/// Fragment substring that marks a password-recovery deep link
pub const RECOVERY_MARKER: &str = "type=recovery";

pub fn is_recovery_fragment(fragment: &str) -> bool {
    fragment.contains(RECOVERY_MARKER)
}

pub trait LocationPort: Send + Sync {
    /// Current fragment (without the leading `#`), empty if none
    fn fragment(&self) -> String;

    /// Remove the fragment so a consumed deep link is not replayed
    fn clear_fragment(&self);
}

/// In-process location holding a fragment that can be cleared
#[derive(Debug, Default)]
pub struct StaticLocation {
    fragment: Mutex<String>,
}

impl StaticLocation {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: Mutex::new(fragment.into()),
        }
    }

    /// Build from a full URL, keeping only what follows `#`
    pub fn from_url(url: &str) -> Self {
        let fragment = url.split_once('#').map(|(_, f)| f).unwrap_or_default();
        Self::new(fragment)
    }
}

impl LocationPort for StaticLocation {
    fn fragment(&self) -> String {
        self.fragment
            .lock()
            .map(|f| f.clone())
            .unwrap_or_default()
    }

    fn clear_fragment(&self) {
        if let Ok(mut f) = self.fragment.lock() {
            f.clear();
        }
    }
}
