//! In-memory auth backend
//!
//! Accounts live for the lifetime of the process. Used when no backend URL
//! is configured, so the client can be explored offline.

use async_trait::async_trait;
use biogenie_application::{AuthError, AuthService, AuthSession, SignUpProfile};
use biogenie_domain::{Credentials, NewPassword, Profile};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
struct Account {
    password: String,
    profile: Profile,
}

#[derive(Debug, Default)]
struct Accounts {
    by_email: HashMap<String, Account>,
    current: Option<String>,
}

/// Process-local [`AuthService`]
#[derive(Debug, Default)]
pub struct InMemoryAuthService {
    inner: Mutex<Accounts>,
}

fn key(email: &str) -> String {
    email.trim().to_lowercase()
}

fn check_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Rejected(format!(
            "Password should be at least {} characters.",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

impl InMemoryAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register an account
    pub fn with_account(self, email: &str, password: &str, full_name: Option<&str>) -> Self {
        let mut profile = Profile::new(email.trim());
        if let Some(name) = full_name {
            profile = profile.with_full_name(name);
        }
        self.lock().by_email.insert(
            key(email),
            Account {
                password: password.to_string(),
                profile,
            },
        );
        self
    }

    fn lock(&self) -> MutexGuard<'_, Accounts> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn current_profile(&self) -> Option<Profile> {
        let accounts = self.lock();
        accounts
            .current
            .as_ref()
            .and_then(|email| accounts.by_email.get(email))
            .map(|account| account.profile.clone())
    }
}

#[async_trait]
impl AuthService for InMemoryAuthService {
    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError> {
        Ok(self.current_profile().map(|user| AuthSession { user }))
    }

    async fn sign_up(
        &self,
        credentials: &Credentials,
        profile: &SignUpProfile,
    ) -> Result<(), AuthError> {
        check_password(credentials.password())?;

        let mut accounts = self.lock();
        let email = key(credentials.email());
        if accounts.by_email.contains_key(&email) {
            return Err(AuthError::Rejected("User already registered".to_string()));
        }
        accounts.by_email.insert(
            email,
            Account {
                password: credentials.password().to_string(),
                profile: Profile::new(credentials.email()).with_full_name(profile.full_name.clone()),
            },
        );
        debug!("Registered in-memory account {}", credentials.email());
        Ok(())
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let mut accounts = self.lock();
        let email = key(credentials.email());
        match accounts.by_email.get(&email) {
            Some(account) if account.password == credentials.password() => {
                accounts.current = Some(email);
                Ok(())
            }
            _ => Err(AuthError::Rejected("Invalid login credentials".to_string())),
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.lock().current = None;
        Ok(())
    }

    async fn request_password_reset(&self, email: &str, redirect_to: &str) -> Result<(), AuthError> {
        // Unknown addresses are not revealed.
        info!(
            "In-memory backend: recovery link for {} would be {}#type=recovery&email={}",
            email, redirect_to, email
        );
        Ok(())
    }

    async fn update_password(&self, new_password: &NewPassword) -> Result<(), AuthError> {
        check_password(new_password.as_str())?;

        let mut accounts = self.lock();
        let Some(email) = accounts.current.clone() else {
            return Err(AuthError::Rejected("Auth session missing!".to_string()));
        };
        if let Some(account) = accounts.by_email.get_mut(&email) {
            account.password = new_password.as_str().to_string();
        }
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<Profile>, AuthError> {
        Ok(self.current_profile())
    }

    /// Recovery links for this backend carry the account's `email=` instead
    /// of tokens.
    async fn accept_recovery_link(&self, fragment: &str) -> Result<(), AuthError> {
        let email = fragment
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find_map(|(k, v)| (k == "email").then(|| key(v)));

        let mut accounts = self.lock();
        match email {
            Some(email) if accounts.by_email.contains_key(&email) => {
                accounts.current = Some(email);
                Ok(())
            }
            _ => Err(AuthError::Rejected("Auth session missing!".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials::try_new(email, password).unwrap()
    }

    fn named(name: &str) -> SignUpProfile {
        SignUpProfile {
            full_name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_does_not_sign_in() {
        let auth = InMemoryAuthService::new();
        auth.sign_up(&creds("ada@example.com", "secret1"), &named("Ada"))
            .await
            .unwrap();
        assert_eq!(auth.current_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sign_in_round_trip() {
        let auth = InMemoryAuthService::new();
        auth.sign_up(&creds("ada@example.com", "secret1"), &named("Ada Lovelace"))
            .await
            .unwrap();

        auth.sign_in(&creds("ADA@example.com", "secret1")).await.unwrap();

        let user = auth.current_user().await.unwrap().unwrap();
        assert_eq!(user.display_name(), "Ada Lovelace");
        assert!(auth.current_session().await.unwrap().is_some());

        auth.sign_out().await.unwrap();
        assert_eq!(auth.current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let auth = InMemoryAuthService::new().with_account("ada@example.com", "secret1", None);
        let err = auth.sign_in(&creds("ada@example.com", "nope")).await.unwrap_err();
        assert_eq!(err.message(), "Invalid login credentials");
    }

    #[tokio::test]
    async fn test_duplicate_and_weak_signups() {
        let auth = InMemoryAuthService::new().with_account("ada@example.com", "secret1", None);
        let err = auth
            .sign_up(&creds("ada@example.com", "another1"), &named("Ada"))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "User already registered");

        let err = auth
            .sign_up(&creds("grace@example.com", "abc"), &named("Grace"))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Password should be at least 6 characters.");
    }

    #[tokio::test]
    async fn test_recovery_link_allows_password_update() {
        let auth = InMemoryAuthService::new().with_account("ada@example.com", "secret1", None);

        auth.accept_recovery_link("type=recovery&email=ada@example.com")
            .await
            .unwrap();
        auth.update_password(&NewPassword::try_new("brand-new").unwrap())
            .await
            .unwrap();
        auth.sign_out().await.unwrap();

        assert!(auth.sign_in(&creds("ada@example.com", "secret1")).await.is_err());
        assert!(auth.sign_in(&creds("ada@example.com", "brand-new")).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_without_session() {
        let auth = InMemoryAuthService::new();
        let err = auth
            .update_password(&NewPassword::try_new("brand-new").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Auth session missing!");
    }
}
