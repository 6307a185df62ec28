//! Error types for the backend adapters

use biogenie_application::{AuthError, StorageError};
use thiserror::Error;

/// Result type alias for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;

/// Errors that can occur when talking to the auth/storage backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Auth session missing!")]
    SessionMissing,
}

impl BackendError {
    /// Whether the backend itself refused the request (as opposed to
    /// being unreachable)
    pub fn is_rejection(&self) -> bool {
        match self {
            BackendError::Api { status, .. } => (400..500).contains(status),
            BackendError::SessionMissing => true,
            _ => false,
        }
    }
}

impl From<BackendError> for AuthError {
    fn from(e: BackendError) -> Self {
        if e.is_rejection() {
            AuthError::Rejected(e.to_string())
        } else {
            AuthError::Unavailable(e.to_string())
        }
    }
}

impl From<BackendError> for StorageError {
    fn from(e: BackendError) -> Self {
        StorageError::RequestFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_rejections() {
        let e = BackendError::Api {
            status: 400,
            message: "Invalid login credentials".to_string(),
        };
        assert_eq!(
            AuthError::from(e),
            AuthError::Rejected("Invalid login credentials".to_string())
        );
    }

    #[test]
    fn test_server_errors_are_unavailable() {
        let e = BackendError::Api {
            status: 503,
            message: "upstream timeout".to_string(),
        };
        assert!(matches!(AuthError::from(e), AuthError::Unavailable(_)));
    }

    #[test]
    fn test_missing_session_message() {
        let e: AuthError = BackendError::SessionMissing.into();
        assert_eq!(e.message(), "Auth session missing!");
    }
}
