//! Application state and the reducer that updates it
//!
//! [`AppState`] is the single source of truth for what the client shows.
//! It only changes through [`reduce`] / [`AppState::apply`], so every
//! transition is a pure function of the current state and an [`Action`].

use super::action::{Action, Notice, PendingOperation};
use super::screen::Screen;
use crate::catalog::features::{FeatureCard, FeatureCatalog};
use crate::catalog::role::Role;
use crate::chat::transcript::ChatTranscript;
use crate::labs::browser::LabBrowser;
use crate::labs::video::{VideoState, video_object_key};
use crate::session::entities::Session;

/// Notice shown on the login screen after a successful sign-up
pub const SIGNED_UP_NOTICE: &str = "Account created! Please sign in to continue.";
/// Notice shown after a reset link has been requested
pub const RESET_SENT_NOTICE: &str = "Password reset link sent. Please check your email.";
/// Notice shown on the login screen after the password was changed
pub const PASSWORD_UPDATED_NOTICE: &str = "Password updated. Please sign in with your new password.";

/// Whole-client state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub session: Session,
    pub screen: Screen,
    pub role: Option<Role>,
    pub feature: Option<String>,
    pub transcript: Option<ChatTranscript>,
    pub labs: LabBrowser,
    pub video: VideoState,
    pub notice: Option<Notice>,
    pub pending: Option<PendingOperation>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards for the selected role's dashboard (empty when unset or unknown)
    pub fn feature_cards(&self) -> &'static [FeatureCard] {
        self.role
            .as_ref()
            .map(FeatureCatalog::for_role)
            .unwrap_or(&[])
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply an action in place. Returns `false` when the action was ignored
    /// because the current screen does not expose it.
    pub fn apply(&mut self, action: Action) -> bool {
        if action.is_intent() && !action.is_exposed_on(self.screen) {
            return false;
        }

        match action {
            Action::ContinueAsGuest => self.go(Screen::RoleSelect),
            Action::ShowLogin => self.go(Screen::Login),
            Action::ShowSignup => self.go(Screen::Signup),
            Action::ShowPasswordReset => self.go(Screen::Reset),
            Action::SelectRole(role) => {
                let target = if role.opens_lab_catalog() {
                    self.labs = LabBrowser::new();
                    self.video = VideoState::Idle;
                    Screen::LabCatalog
                } else {
                    Screen::Dashboard
                };
                self.role = Some(role);
                self.go(target);
            }
            Action::OpenFeature(title) => {
                self.transcript = Some(ChatTranscript::new(title.clone()));
                self.feature = Some(title);
                self.go(Screen::FeatureDetail);
            }
            Action::CloseFeature => self.close_feature(),
            Action::SendMessage(text) => {
                if let Some(transcript) = self.transcript.as_mut() {
                    transcript.send(&text);
                }
            }
            Action::SelectClass(class_id) => {
                self.labs.select_class(class_id);
                self.video = VideoState::Idle;
            }
            Action::OpenLab(lab_id) => {
                self.labs.open_lab(lab_id);
                self.video = VideoState::Idle;
            }
            Action::SelectTab(tab) => self.labs.select_tab(tab),
            Action::Back => self.back(),
            Action::DismissNotice => self.notice = None,

            Action::OperationStarted(operation) => {
                self.pending = Some(operation);
                self.notice = None;
            }
            Action::OperationFailed { message, .. } => {
                self.pending = None;
                self.notice = Some(Notice::Error(message));
            }
            Action::ValidationFailed(message) => {
                self.notice = Some(Notice::Error(message));
            }
            Action::SessionRestored(profile) => {
                self.pending = None;
                match profile {
                    Some(profile) => {
                        self.session = Session::authenticated(&profile);
                        self.go(Screen::RoleSelect);
                    }
                    None => self.session = Session::anonymous(),
                }
            }
            Action::RecoveryLinkOpened => {
                self.pending = None;
                self.go(Screen::UpdatePassword);
            }
            Action::LoggedIn(profile) => {
                self.pending = None;
                self.session = Session::authenticated(&profile);
                self.go(Screen::RoleSelect);
            }
            Action::SignedUp => {
                self.pending = None;
                self.go(Screen::Login);
                self.notice = Some(Notice::Info(SIGNED_UP_NOTICE.to_string()));
            }
            Action::ResetEmailSent => {
                self.pending = None;
                self.notice = Some(Notice::Info(RESET_SENT_NOTICE.to_string()));
            }
            Action::PasswordUpdated => {
                self.pending = None;
                self.go(Screen::Login);
                self.notice = Some(Notice::Info(PASSWORD_UPDATED_NOTICE.to_string()));
            }
            Action::LoggedOut => *self = AppState::default(),
            Action::VideoUpdated(video) => {
                // Drop results for a lab that is no longer open.
                let current = self.labs.lab_id().map(video_object_key);
                if self.screen == Screen::LabCatalog
                    && current.is_some()
                    && current.as_deref() == video.object_key()
                {
                    self.video = video;
                } else {
                    return false;
                }
            }
        }
        true
    }

    fn go(&mut self, screen: Screen) {
        self.screen = screen;
        self.notice = None;
    }

    fn close_feature(&mut self) {
        self.feature = None;
        self.transcript = None;
        self.go(Screen::Dashboard);
    }

    fn back(&mut self) {
        match self.screen {
            Screen::FeatureDetail => self.close_feature(),
            Screen::LabCatalog => {
                self.video = VideoState::Idle;
                if !self.labs.back() {
                    self.go(Screen::LabCatalog.predecessor());
                }
            }
            screen => self.go(screen.predecessor()),
        }
    }
}

/// Pure reducer: `(state, action) -> state`
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    state.apply(action);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::transcript::ASSISTANT_PLACEHOLDER;
    use crate::labs::browser::LabTab;
    use crate::session::entities::Profile;

    fn run(actions: Vec<Action>) -> AppState {
        actions.into_iter().fold(AppState::new(), reduce)
    }

    fn ada() -> Profile {
        Profile::new("ada@example.com").with_full_name("Ada")
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.screen, Screen::Landing);
        assert!(!state.session.is_authenticated());
        assert!(state.role.is_none());
        assert!(state.feature.is_none());
    }

    #[test]
    fn test_guest_flow_to_dashboard() {
        let state = run(vec![
            Action::ContinueAsGuest,
            Action::SelectRole(Role::Student),
        ]);
        assert_eq!(state.screen, Screen::Dashboard);
        assert_eq!(state.feature_cards().len(), 9);
    }

    #[test]
    fn test_role_catalog_sizes() {
        for (role, size) in [(Role::Student, 9), (Role::Teacher, 8), (Role::Public, 5)] {
            let state = run(vec![Action::ContinueAsGuest, Action::SelectRole(role)]);
            assert_eq!(state.screen, Screen::Dashboard);
            assert_eq!(state.feature_cards().len(), size);
        }
    }

    #[test]
    fn test_labs_role_opens_lab_catalog() {
        let state = run(vec![Action::ContinueAsGuest, Action::SelectRole(Role::Labs)]);
        assert_eq!(state.screen, Screen::LabCatalog);
        assert!(state.feature_cards().is_empty());
    }

    #[test]
    fn test_unknown_role_shows_empty_dashboard() {
        let state = run(vec![
            Action::ContinueAsGuest,
            Action::SelectRole(Role::Other("alien".into())),
        ]);
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(state.feature_cards().is_empty());
    }

    #[test]
    fn test_intent_on_wrong_screen_is_ignored() {
        let mut state = AppState::new();
        let before = state.clone();
        assert!(!state.apply(Action::SelectRole(Role::Student)));
        assert!(!state.apply(Action::OpenFeature("PPT Maker".into())));
        assert!(!state.apply(Action::ShowPasswordReset));
        assert_eq!(state, before);
    }

    #[test]
    fn test_open_feature_seeds_transcript_and_close_discards() {
        let mut state = run(vec![
            Action::ContinueAsGuest,
            Action::SelectRole(Role::Teacher),
            Action::OpenFeature("PPT Maker".into()),
        ]);
        assert_eq!(state.screen, Screen::FeatureDetail);
        assert_eq!(state.feature.as_deref(), Some("PPT Maker"));
        assert_eq!(state.transcript.as_ref().map(|t| t.len()), Some(1));

        state.apply(Action::SendMessage("hello".into()));
        let transcript = state.transcript.as_ref().unwrap();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.entries()[2].text, ASSISTANT_PLACEHOLDER);

        state.apply(Action::CloseFeature);
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(state.feature.is_none());
        assert!(state.transcript.is_none());

        state.apply(Action::OpenFeature("PPT Maker".into()));
        assert_eq!(state.transcript.as_ref().map(|t| t.len()), Some(1));
    }

    #[test]
    fn test_blank_message_leaves_transcript() {
        let mut state = run(vec![
            Action::ContinueAsGuest,
            Action::SelectRole(Role::Public),
            Action::OpenFeature("News Simplifier".into()),
        ]);
        let before = state.transcript.clone();
        state.apply(Action::SendMessage("   ".into()));
        assert_eq!(state.transcript, before);
    }

    #[test]
    fn test_back_is_fixed_predecessor() {
        // Reach login via signup and via landing; back goes to landing both times.
        let via_signup = run(vec![Action::ShowSignup, Action::ShowLogin, Action::Back]);
        let via_landing = run(vec![Action::ShowLogin, Action::Back]);
        assert_eq!(via_signup.screen, Screen::Landing);
        assert_eq!(via_landing.screen, Screen::Landing);

        let reset = run(vec![Action::ShowLogin, Action::ShowPasswordReset, Action::Back]);
        assert_eq!(reset.screen, Screen::Login);
    }

    #[test]
    fn test_back_from_feature_clears_selection() {
        let state = run(vec![
            Action::ContinueAsGuest,
            Action::SelectRole(Role::Student),
            Action::OpenFeature("Summarizer".into()),
            Action::Back,
        ]);
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(state.feature.is_none());
        assert!(state.transcript.is_none());
    }

    #[test]
    fn test_back_through_lab_levels() {
        let mut state = run(vec![
            Action::ContinueAsGuest,
            Action::SelectRole(Role::Labs),
            Action::SelectClass("class-10".into()),
            Action::OpenLab("stomata".into()),
            Action::SelectTab(LabTab::Procedure),
        ]);
        assert_eq!(state.labs.tab(), LabTab::Procedure);

        state.apply(Action::Back);
        assert_eq!(state.screen, Screen::LabCatalog);
        assert_eq!(state.labs.lab_id(), None);
        state.apply(Action::Back);
        assert_eq!(state.screen, Screen::LabCatalog);
        assert_eq!(state.labs.class_id(), None);
        state.apply(Action::Back);
        assert_eq!(state.screen, Screen::RoleSelect);
    }

    #[test]
    fn test_video_update_for_closed_lab_is_dropped() {
        let mut state = run(vec![
            Action::ContinueAsGuest,
            Action::SelectRole(Role::Labs),
            Action::SelectClass("class-12".into()),
            Action::OpenLab("pcr".into()),
        ]);
        let stale = VideoState::Ready {
            object_key: "gel-electro.mp4".into(),
            url: "https://cdn/gel-electro.mp4".into(),
        };
        assert!(!state.apply(Action::VideoUpdated(stale)));
        assert_eq!(state.video, VideoState::Idle);

        let fresh = VideoState::Ready {
            object_key: "pcr.mp4".into(),
            url: "https://cdn/pcr.mp4".into(),
        };
        assert!(state.apply(Action::VideoUpdated(fresh.clone())));
        assert_eq!(state.video, fresh);
    }

    #[test]
    fn test_login_success_and_failure() {
        let failed = run(vec![
            Action::ShowLogin,
            Action::OperationStarted(PendingOperation::Login),
            Action::OperationFailed {
                operation: PendingOperation::Login,
                message: "Invalid login credentials".into(),
            },
        ]);
        assert_eq!(failed.screen, Screen::Login);
        assert!(!failed.is_busy());
        assert_eq!(
            failed.notice,
            Some(Notice::Error("Invalid login credentials".into()))
        );

        let ok = run(vec![
            Action::ShowLogin,
            Action::OperationStarted(PendingOperation::Login),
            Action::LoggedIn(ada()),
        ]);
        assert_eq!(ok.screen, Screen::RoleSelect);
        assert!(ok.session.is_authenticated());
        assert_eq!(ok.session.display_name(), "Ada");
        assert!(ok.notice.is_none());
    }

    #[test]
    fn test_signup_returns_to_login_with_notice() {
        let state = run(vec![
            Action::ShowSignup,
            Action::OperationStarted(PendingOperation::Signup),
            Action::SignedUp,
        ]);
        assert_eq!(state.screen, Screen::Login);
        assert!(!state.session.is_authenticated());
        assert_eq!(state.notice, Some(Notice::Info(SIGNED_UP_NOTICE.into())));
    }

    #[test]
    fn test_logout_resets_everything() {
        let state = run(vec![
            Action::SessionRestored(Some(ada())),
            Action::SelectRole(Role::Student),
            Action::OpenFeature("Doubt Solver".into()),
            Action::SendMessage("hi".into()),
            Action::LoggedOut,
        ]);
        assert_eq!(state, AppState::default());
        assert!(!state.session.is_authenticated());
        assert_eq!(state.session.display_name(), "");
        assert!(state.role.is_none());
        assert!(state.feature.is_none());
        assert_eq!(state.screen, Screen::Landing);
    }

    #[test]
    fn test_session_restore_is_idempotent() {
        let once = run(vec![Action::SessionRestored(Some(ada()))]);
        let twice = reduce(once.clone(), Action::SessionRestored(Some(ada())));
        assert_eq!(once, twice);
        assert_eq!(once.screen, Screen::RoleSelect);

        let none = run(vec![Action::SessionRestored(None)]);
        assert_eq!(reduce(none.clone(), Action::SessionRestored(None)), none);
        assert_eq!(none.screen, Screen::Landing);
    }

    #[test]
    fn test_recovery_link_forces_update_password() {
        let state = run(vec![Action::RecoveryLinkOpened]);
        assert_eq!(state.screen, Screen::UpdatePassword);
        let done = run(vec![
            Action::RecoveryLinkOpened,
            Action::OperationStarted(PendingOperation::PasswordUpdate),
            Action::PasswordUpdated,
        ]);
        assert_eq!(done.screen, Screen::Login);
        assert_eq!(
            done.notice,
            Some(Notice::Info(PASSWORD_UPDATED_NOTICE.into()))
        );
    }

    #[test]
    fn test_navigation_ignores_history() {
        // Same (state, intent) pair → same result, however the state was reached.
        let a = run(vec![Action::ContinueAsGuest, Action::SelectRole(Role::Public)]);
        let b = run(vec![
            Action::ContinueAsGuest,
            Action::SelectRole(Role::Public),
            Action::OpenFeature("Agriculture Biotech".into()),
            Action::Back,
        ]);
        assert_eq!(a, b);
        assert_eq!(reduce(a, Action::Back), reduce(b, Action::Back));
    }

    #[test]
    fn test_screen_change_clears_notice() {
        let state = run(vec![
            Action::ShowLogin,
            Action::ValidationFailed("Please fill in all fields".into()),
            Action::ShowSignup,
        ]);
        assert!(state.notice.is_none());
    }
}
