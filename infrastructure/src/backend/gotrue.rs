//! GoTrue (Supabase Auth) REST adapter
//!
//! Implements [`AuthService`] against the `/auth/v1` endpoints. The adapter
//! owns the token pair: it keeps it in memory, mirrors it to a
//! [`SessionStore`] when one is configured, and refreshes an expired access
//! token once when the session is restored.

use super::error::{BackendError, Result};
use super::session_store::{SessionStore, StoredSession};
use async_trait::async_trait;
use biogenie_application::{AuthError, AuthService, AuthSession, SignUpProfile};
use biogenie_domain::{Credentials, NewPassword, Profile};
use chrono::Utc;
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, warn};

// ==================== Wire types ====================

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: Option<i64>,
    user: UserResponse,
}

impl TokenResponse {
    fn into_session(self) -> StoredSession {
        StoredSession::new(
            self.access_token,
            self.refresh_token,
            self.expires_in,
            self.user.into_profile(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    full_name: Option<String>,
}

impl UserResponse {
    fn into_profile(self) -> Profile {
        Profile {
            email: self.email.unwrap_or_default(),
            full_name: self.user_metadata.full_name,
        }
    }
}

/// Error payloads differ between endpoints and GoTrue versions.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.to_string()
            } else {
                body.trim().to_string()
            }
        })
}

/// Tokens carried in the fragment of a recovery link
#[derive(Debug, PartialEq, Eq)]
struct RecoveryTokens<'a> {
    access_token: &'a str,
    refresh_token: &'a str,
    expires_in: Option<i64>,
}

fn parse_recovery_fragment(fragment: &str) -> Option<RecoveryTokens<'_>> {
    let mut access_token = None;
    let mut refresh_token = "";
    let mut expires_in = None;

    for (key, value) in fragment.split('&').filter_map(|pair| pair.split_once('=')) {
        match key {
            "access_token" if !value.is_empty() => access_token = Some(value),
            "refresh_token" => refresh_token = value,
            "expires_in" => expires_in = value.parse().ok(),
            _ => {}
        }
    }

    access_token.map(|access_token| RecoveryTokens {
        access_token,
        refresh_token,
        expires_in,
    })
}

// ==================== Adapter ====================

/// [`AuthService`] backed by a GoTrue server
pub struct GoTrueAuthService {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    store: Option<SessionStore>,
    session: Mutex<Option<StoredSession>>,
}

impl GoTrueAuthService {
    /// Create an adapter for the project at `base_url`
    /// (e.g. `https://xyz.supabase.co`).
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BackendError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            store: None,
            session: Mutex::new(None),
        })
    }

    /// Persist the session in `store`, picking up whatever it already holds
    pub fn with_session_store(mut self, store: SessionStore) -> Self {
        let loaded = store.load();
        if loaded.is_some() {
            debug!("Loaded stored session from {}", store.path().display());
        }
        self.session = Mutex::new(loaded);
        self.store = Some(store);
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> RequestBuilder {
        self.http
            .request(method, self.endpoint(path))
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer.unwrap_or(&self.anon_key))
    }

    async fn checked(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        let response = Self::checked(request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn send_ignoring_body(request: RequestBuilder) -> Result<()> {
        Self::checked(request.send().await?).await?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Option<StoredSession>> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn stored(&self) -> Option<StoredSession> {
        self.lock().clone()
    }

    /// Replace the held session and mirror it to disk
    fn remember(&self, session: Option<StoredSession>) {
        if let Some(store) = &self.store {
            match &session {
                Some(s) => {
                    if let Err(e) = store.save(s) {
                        warn!("Could not persist session: {}", e);
                    }
                }
                None => store.clear(),
            }
        }
        *self.lock() = session;
    }

    async fn refresh(&self, refresh_token: &str) -> Result<StoredSession> {
        let request = self
            .request(Method::POST, "token", None)
            .query(&[("grant_type", "refresh_token")])
            .json(&json!({ "refresh_token": refresh_token }));
        let tokens: TokenResponse = Self::send(request).await?;
        Ok(tokens.into_session())
    }

    async fn fetch_user(&self, access_token: &str) -> Result<Profile> {
        let user: UserResponse =
            Self::send(self.request(Method::GET, "user", Some(access_token))).await?;
        Ok(user.into_profile())
    }
}

#[async_trait]
impl AuthService for GoTrueAuthService {
    async fn current_session(&self) -> std::result::Result<Option<AuthSession>, AuthError> {
        let Some(stored) = self.stored() else {
            return Ok(None);
        };

        if !stored.is_expired(Utc::now()) {
            return Ok(Some(AuthSession { user: stored.user }));
        }

        debug!("Access token expired, refreshing");
        match self.refresh(&stored.refresh_token).await {
            Ok(fresh) => {
                let user = fresh.user.clone();
                self.remember(Some(fresh));
                Ok(Some(AuthSession { user }))
            }
            Err(e) if e.is_rejection() => {
                warn!("Stored session could not be refreshed: {}", e);
                self.remember(None);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn sign_up(
        &self,
        credentials: &Credentials,
        profile: &SignUpProfile,
    ) -> std::result::Result<(), AuthError> {
        let request = self.request(Method::POST, "signup", None).json(&json!({
            "email": credentials.email(),
            "password": credentials.password(),
            "data": { "full_name": profile.full_name },
        }));
        // A session returned here (auto-confirm projects) is not adopted:
        // new accounts go through the regular sign-in.
        Self::send_ignoring_body(request).await?;
        debug!("Account created for {}", credentials.email());
        Ok(())
    }

    async fn sign_in(&self, credentials: &Credentials) -> std::result::Result<(), AuthError> {
        let request = self
            .request(Method::POST, "token", None)
            .query(&[("grant_type", "password")])
            .json(&json!({
                "email": credentials.email(),
                "password": credentials.password(),
            }));
        let tokens: TokenResponse = Self::send(request).await?;
        self.remember(Some(tokens.into_session()));
        Ok(())
    }

    async fn sign_out(&self) -> std::result::Result<(), AuthError> {
        let Some(stored) = self.stored() else {
            return Ok(());
        };
        self.remember(None);
        Self::send_ignoring_body(self.request(Method::POST, "logout", Some(&stored.access_token)))
            .await?;
        Ok(())
    }

    async fn request_password_reset(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> std::result::Result<(), AuthError> {
        let request = self
            .request(Method::POST, "recover", None)
            .query(&[("redirect_to", redirect_to)])
            .json(&json!({ "email": email }));
        Self::send_ignoring_body(request).await?;
        info!("Password reset e-mail requested");
        Ok(())
    }

    async fn update_password(
        &self,
        new_password: &NewPassword,
    ) -> std::result::Result<(), AuthError> {
        let stored = self.stored().ok_or(BackendError::SessionMissing)?;
        let request = self
            .request(Method::PUT, "user", Some(&stored.access_token))
            .json(&json!({ "password": new_password.as_str() }));
        Self::send_ignoring_body(request).await?;
        Ok(())
    }

    async fn current_user(&self) -> std::result::Result<Option<Profile>, AuthError> {
        let Some(stored) = self.stored() else {
            return Ok(None);
        };
        let profile = self.fetch_user(&stored.access_token).await?;
        Ok(Some(profile))
    }

    async fn accept_recovery_link(&self, fragment: &str) -> std::result::Result<(), AuthError> {
        let tokens = parse_recovery_fragment(fragment).ok_or(BackendError::SessionMissing)?;
        let user = self.fetch_user(tokens.access_token).await?;
        debug!("Adopted recovery session for {}", user.email);
        self.remember(Some(StoredSession::new(
            tokens.access_token,
            tokens.refresh_token,
            tokens.expires_in,
            user,
        )));
        Ok(())
    }
}
