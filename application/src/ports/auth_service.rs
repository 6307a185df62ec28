//! Auth service port
//!
//! Defines the interface to the external authentication backend. The client
//! never verifies credentials itself; it only relays them.

use async_trait::async_trait;
use biogenie_domain::{Credentials, NewPassword, Profile};
use thiserror::Error;

/// Errors reported by the auth collaborator
///
/// Both variants carry a human-readable message that is shown to the user
/// unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The backend refused the request (bad credentials, weak password, ...)
    #[error("{0}")]
    Rejected(String),

    /// The backend could not be reached or answered unexpectedly
    #[error("{0}")]
    Unavailable(String),
}

impl AuthError {
    pub fn message(&self) -> &str {
        match self {
            AuthError::Rejected(m) | AuthError::Unavailable(m) => m,
        }
    }
}

/// A session held by the auth collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user: Profile,
}

/// Profile metadata submitted at sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpProfile {
    pub full_name: String,
}

/// Gateway to the authentication backend
///
/// Implementations (adapters) live in the infrastructure layer and own
/// token storage.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Return the stored session, if one exists and is still valid
    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError>;

    /// Create an account. The new account still has to sign in.
    async fn sign_up(
        &self,
        credentials: &Credentials,
        profile: &SignUpProfile,
    ) -> Result<(), AuthError>;

    /// Verify credentials and store the resulting session
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError>;

    /// Invalidate the remote session and forget the stored one
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Send a password-reset e-mail whose link leads back to `redirect_to`
    async fn request_password_reset(&self, email: &str, redirect_to: &str)
    -> Result<(), AuthError>;

    /// Change the password of the account the current session belongs to
    async fn update_password(&self, new_password: &NewPassword) -> Result<(), AuthError>;

    /// Profile of the signed-in user
    async fn current_user(&self) -> Result<Option<Profile>, AuthError>;

    /// Adopt the temporary session carried by a password-recovery link
    /// (the URL fragment, without `#`). Backends that do not issue tokens
    /// in the link have nothing to do.
    async fn accept_recovery_link(&self, _fragment: &str) -> Result<(), AuthError> {
        Ok(())
    }
}
