//! Auth configuration from TOML (`[auth]` section)

use biogenie_application::config::DEFAULT_RESET_REDIRECT;
use serde::{Deserialize, Serialize};

/// Raw auth configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// Page that password-reset e-mails link back to
    pub reset_redirect: String,
    /// Keep the signed-in session on disk between runs
    pub persist_session: bool,
    /// Override for the session file location
    pub session_file: Option<String>,
}

impl Default for FileAuthConfig {
    fn default() -> Self {
        Self {
            reset_redirect: DEFAULT_RESET_REDIRECT.to_string(),
            persist_session: true,
            session_file: None,
        }
    }
}
