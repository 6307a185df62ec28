//! Session controller use case
//!
//! Owns the client's [`AppState`] and mediates every transition. It is the
//! only component that calls the [`AuthService`]: each credential flow
//! validates locally, marks the operation as in flight, awaits the
//! collaborator and then feeds the outcome back through the reducer.

use crate::config::BehaviorConfig;
use crate::ports::auth_service::{AuthError, AuthService, SignUpProfile};
use crate::ports::location::{LocationPort, StaticLocation, is_recovery_fragment};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use biogenie_domain::{
    Action, AppState, Credentials, DomainError, LabTab, NewPassword, PendingOperation, Profile,
    ResetRequest, Role, SignupForm,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced to the screen that issued an operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A required field was left blank; no collaborator call was made
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The auth collaborator reported a failure
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Whether an intent changed the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Applied,
    /// Not offered on the current screen, or a duplicate of an in-flight call
    Ignored,
}

impl Dispatch {
    pub fn is_applied(self) -> bool {
        matches!(self, Dispatch::Applied)
    }

    fn from_applied(applied: bool) -> Self {
        if applied {
            Dispatch::Applied
        } else {
            Dispatch::Ignored
        }
    }
}

/// Use case owning session and navigation state
pub struct SessionController<A: AuthService + 'static> {
    auth: Arc<A>,
    location: Arc<dyn LocationPort>,
    progress: Arc<dyn ProgressNotifier>,
    config: BehaviorConfig,
    state: Mutex<AppState>,
    /// Stamp of the most recently started collaborator call
    generation: AtomicU64,
}

impl<A: AuthService + 'static> SessionController<A> {
    pub fn new(auth: Arc<A>) -> Self {
        Self {
            auth,
            location: Arc::new(StaticLocation::default()),
            progress: Arc::new(NoProgress),
            config: BehaviorConfig::default(),
            state: Mutex::new(AppState::new()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_location(mut self, location: Arc<dyn LocationPort>) -> Self {
        self.location = location;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_config(mut self, config: BehaviorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AppState {
        self.lock().clone()
    }

    // Every mutation is a single `apply`, so a poisoned lock still holds a
    // consistent state.
    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Feed a local intent (or a completion from another collaborator)
    /// through the reducer. Intents are refused while a call is in flight.
    pub fn dispatch(&self, action: Action) -> Dispatch {
        let mut state = self.lock();
        if let Some(pending) = state.pending
            && action.is_intent()
        {
            debug!("Ignoring {:?} while {} is in flight", action, pending);
            return Dispatch::Ignored;
        }
        let screen = state.screen;
        let description = format!("{:?}", action);
        let applied = state.apply(action);
        if applied {
            debug!("Applied {} on {}", description, screen);
        } else {
            debug!("Ignored {} on {}", description, screen);
        }
        Dispatch::from_applied(applied)
    }

    // ==================== Local intents ====================

    pub fn continue_as_guest(&self) -> Dispatch {
        self.dispatch(Action::ContinueAsGuest)
    }

    pub fn show_login(&self) -> Dispatch {
        self.dispatch(Action::ShowLogin)
    }

    pub fn show_signup(&self) -> Dispatch {
        self.dispatch(Action::ShowSignup)
    }

    pub fn show_password_reset(&self) -> Dispatch {
        self.dispatch(Action::ShowPasswordReset)
    }

    pub fn select_role(&self, role: Role) -> Dispatch {
        self.dispatch(Action::SelectRole(role))
    }

    pub fn open_feature(&self, title: impl Into<String>) -> Dispatch {
        self.dispatch(Action::OpenFeature(title.into()))
    }

    pub fn close_feature(&self) -> Dispatch {
        self.dispatch(Action::CloseFeature)
    }

    pub fn send_message(&self, text: impl Into<String>) -> Dispatch {
        self.dispatch(Action::SendMessage(text.into()))
    }

    pub fn select_class(&self, class_id: impl Into<String>) -> Dispatch {
        self.dispatch(Action::SelectClass(class_id.into()))
    }

    pub fn open_lab(&self, lab_id: impl Into<String>) -> Dispatch {
        self.dispatch(Action::OpenLab(lab_id.into()))
    }

    pub fn select_tab(&self, tab: LabTab) -> Dispatch {
        self.dispatch(Action::SelectTab(tab))
    }

    pub fn navigate_back(&self) -> Dispatch {
        self.dispatch(Action::Back)
    }

    // ==================== Collaborator flows ====================

    /// Restore an existing session at startup.
    ///
    /// A recovery deep link takes precedence over any stored session: the
    /// stored session is not read and the update-password screen opens.
    pub async fn restore_session(&self) -> Result<Dispatch, SessionError> {
        let fragment = self.location.fragment();
        if is_recovery_fragment(&fragment) {
            info!("Password recovery link detected, skipping session restore");
            if let Err(e) = self.auth.accept_recovery_link(&fragment).await {
                warn!("Could not adopt recovery session: {}", e);
            }
            self.lock().apply(Action::RecoveryLinkOpened);
            return Ok(Dispatch::Applied);
        }

        let operation = PendingOperation::SessionRestore;
        let Some((call, ())) = self.try_begin(operation, || Ok(()))? else {
            return Ok(Dispatch::Ignored);
        };

        let result = self.auth.current_session().await.map(|session| {
            match &session {
                Some(s) => info!("Restored session for {}", s.user.display_name()),
                None => debug!("No stored session"),
            }
            Action::SessionRestored(session.map(|s| s.user))
        });
        self.finish(operation, call, result)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Dispatch, SessionError> {
        let operation = PendingOperation::Login;
        let Some((call, credentials)) =
            self.try_begin(operation, || Credentials::try_new(email, password))?
        else {
            return Ok(Dispatch::Ignored);
        };

        info!("Signing in {}", credentials.email());
        let result = match self.auth.sign_in(&credentials).await {
            Ok(()) => Ok(Action::LoggedIn(self.signed_in_profile(&credentials).await)),
            Err(e) => Err(e),
        };
        self.finish(operation, call, result)
    }

    /// Create an account. On success the user is sent back to the login
    /// screen, since the new account still has to sign in.
    pub async fn signup(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Dispatch, SessionError> {
        let operation = PendingOperation::Signup;
        let Some((call, form)) =
            self.try_begin(operation, || SignupForm::try_new(full_name, email, password))?
        else {
            return Ok(Dispatch::Ignored);
        };

        info!("Creating account for {}", form.credentials().email());
        let profile = SignUpProfile {
            full_name: form.full_name().to_string(),
        };
        let result = self
            .auth
            .sign_up(form.credentials(), &profile)
            .await
            .map(|()| Action::SignedUp);
        self.finish(operation, call, result)
    }

    /// Sign out. The local session is cleared whatever the remote outcome,
    /// and an in-flight credential call does not block it.
    pub async fn logout(&self) -> Dispatch {
        if let Err(e) = self.auth.sign_out().await {
            warn!("Remote sign-out failed, clearing local session anyway: {}", e);
        }
        self.lock().apply(Action::LoggedOut);
        info!("Signed out");
        Dispatch::Applied
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<Dispatch, SessionError> {
        let operation = PendingOperation::PasswordReset;
        let Some((call, request)) = self.try_begin(operation, || ResetRequest::try_new(email))?
        else {
            return Ok(Dispatch::Ignored);
        };

        info!("Requesting password reset for {}", request.email());
        let result = self
            .auth
            .request_password_reset(request.email(), &self.config.reset_redirect)
            .await
            .map(|()| Action::ResetEmailSent);
        self.finish(operation, call, result)
    }

    /// Set a new password from the recovery screen, then consume the
    /// recovery link.
    pub async fn complete_password_reset(
        &self,
        new_password: &str,
    ) -> Result<Dispatch, SessionError> {
        let operation = PendingOperation::PasswordUpdate;
        let Some((call, password)) =
            self.try_begin(operation, || NewPassword::try_new(new_password))?
        else {
            return Ok(Dispatch::Ignored);
        };

        let result = self.auth.update_password(&password).await.map(|()| {
            self.location.clear_fragment();
            Action::PasswordUpdated
        });
        self.finish(operation, call, result)
    }

    // ==================== Helpers ====================

    /// Validate input and mark `operation` as in flight, atomically.
    ///
    /// Returns the call's generation stamp with the validated input, or
    /// `Ok(None)` when the operation must be skipped: another call is
    /// pending or the current screen does not offer it.
    fn try_begin<T>(
        &self,
        operation: PendingOperation,
        validate: impl FnOnce() -> Result<T, DomainError>,
    ) -> Result<Option<(u64, T)>, SessionError> {
        let mut state = self.lock();

        if let Some(pending) = state.pending {
            info!("Ignoring {} while {} is in flight", operation, pending);
            return Ok(None);
        }

        let start = Action::OperationStarted(operation);
        if !start.is_exposed_on(state.screen) {
            debug!("{} is not offered on {}", operation, state.screen);
            return Ok(None);
        }

        match validate() {
            Ok(input) => {
                state.apply(start);
                let call = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
                drop(state);
                self.progress.on_operation_start(operation);
                Ok(Some((call, input)))
            }
            Err(e) => {
                debug!("{} rejected locally: {}", operation, e);
                state.apply(Action::ValidationFailed(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Apply the outcome of call `call`, unless it was superseded (for
    /// example by a logout, or by a newer call started after one).
    fn finish(
        &self,
        operation: PendingOperation,
        call: u64,
        result: Result<Action, AuthError>,
    ) -> Result<Dispatch, SessionError> {
        self.progress.on_operation_complete(operation, result.is_ok());

        let mut state = self.lock();
        if state.pending != Some(operation) || self.generation.load(Ordering::SeqCst) != call {
            debug!("Dropping stale {} result", operation);
            return Ok(Dispatch::Ignored);
        }

        match result {
            Ok(action) => {
                state.apply(action);
                Ok(Dispatch::Applied)
            }
            Err(e) => {
                warn!("{} failed: {}", operation, e);
                state.apply(Action::OperationFailed {
                    operation,
                    message: e.message().to_string(),
                });
                Err(e.into())
            }
        }
    }

    async fn signed_in_profile(&self, credentials: &Credentials) -> Profile {
        match self.auth.current_user().await {
            Ok(Some(profile)) => profile,
            Ok(None) => Profile::new(credentials.email()),
            Err(e) => {
                warn!("Could not load profile after sign-in: {}", e);
                Profile::new(credentials.email())
            }
        }
    }
}
