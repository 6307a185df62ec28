//! Actions accepted by the navigation reducer

use super::screen::Screen;
use crate::catalog::role::Role;
use crate::labs::browser::LabTab;
use crate::labs::video::VideoState;
use crate::session::entities::Profile;

/// A collaborator call the client is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingOperation {
    SessionRestore,
    Login,
    Signup,
    PasswordReset,
    PasswordUpdate,
}

impl PendingOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            PendingOperation::SessionRestore => "session-restore",
            PendingOperation::Login => "login",
            PendingOperation::Signup => "signup",
            PendingOperation::PasswordReset => "password-reset",
            PendingOperation::PasswordUpdate => "password-update",
        }
    }

    /// Screen whose form issues this operation; `None` when it is not
    /// tied to a form.
    pub fn form_screen(&self) -> Option<Screen> {
        match self {
            PendingOperation::SessionRestore => None,
            PendingOperation::Login => Some(Screen::Login),
            PendingOperation::Signup => Some(Screen::Signup),
            PendingOperation::PasswordReset => Some(Screen::Reset),
            PendingOperation::PasswordUpdate => Some(Screen::UpdatePassword),
        }
    }
}

impl std::fmt::Display for PendingOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Message attached to the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(s) | Notice::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Everything that can change [`AppState`](super::state::AppState).
///
/// User intents are only serviced on the screens that expose them.
/// Completions report the outcome of a collaborator call and are accepted
/// on any screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ==================== User intents ====================
    ContinueAsGuest,
    ShowLogin,
    ShowSignup,
    ShowPasswordReset,
    SelectRole(Role),
    OpenFeature(String),
    CloseFeature,
    SendMessage(String),
    SelectClass(String),
    OpenLab(String),
    SelectTab(LabTab),
    Back,
    DismissNotice,

    // ==================== Collaborator lifecycle ====================
    OperationStarted(PendingOperation),
    OperationFailed {
        operation: PendingOperation,
        message: String,
    },
    ValidationFailed(String),
    SessionRestored(Option<Profile>),
    RecoveryLinkOpened,
    LoggedIn(Profile),
    SignedUp,
    ResetEmailSent,
    PasswordUpdated,
    LoggedOut,
    VideoUpdated(VideoState),
}

impl Action {
    /// Whether this action is a user intent (as opposed to a completion)
    pub fn is_intent(&self) -> bool {
        matches!(
            self,
            Action::ContinueAsGuest
                | Action::ShowLogin
                | Action::ShowSignup
                | Action::ShowPasswordReset
                | Action::SelectRole(_)
                | Action::OpenFeature(_)
                | Action::CloseFeature
                | Action::SendMessage(_)
                | Action::SelectClass(_)
                | Action::OpenLab(_)
                | Action::SelectTab(_)
                | Action::Back
                | Action::DismissNotice
                | Action::OperationStarted(_)
        )
    }

    /// Whether `screen` offers this action
    pub fn is_exposed_on(&self, screen: Screen) -> bool {
        match self {
            Action::ContinueAsGuest => screen == Screen::Landing,
            Action::ShowLogin => matches!(screen, Screen::Landing | Screen::Signup),
            Action::ShowSignup => matches!(screen, Screen::Landing | Screen::Login),
            Action::ShowPasswordReset => screen == Screen::Login,
            Action::SelectRole(_) => screen == Screen::RoleSelect,
            Action::OpenFeature(_) => screen == Screen::Dashboard,
            Action::CloseFeature | Action::SendMessage(_) => screen == Screen::FeatureDetail,
            Action::SelectClass(_) | Action::OpenLab(_) | Action::SelectTab(_) => {
                screen == Screen::LabCatalog
            }
            Action::OperationStarted(op) => op.form_screen().is_none_or(|s| s == screen),
            // Back, DismissNotice and every completion
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_operations_only_on_their_screen() {
        let login = Action::OperationStarted(PendingOperation::Login);
        assert!(login.is_exposed_on(Screen::Login));
        assert!(!login.is_exposed_on(Screen::Landing));
        assert!(!login.is_exposed_on(Screen::Signup));

        let restore = Action::OperationStarted(PendingOperation::SessionRestore);
        for screen in Screen::ALL {
            assert!(restore.is_exposed_on(screen));
        }
    }

    #[test]
    fn test_completions_are_not_intents() {
        assert!(!Action::LoggedOut.is_intent());
        assert!(!Action::SignedUp.is_intent());
        assert!(Action::Back.is_intent());
        assert!(Action::SelectRole(Role::Student).is_intent());
    }

    #[test]
    fn test_dashboard_intents() {
        assert!(Action::OpenFeature("PPT Maker".into()).is_exposed_on(Screen::Dashboard));
        assert!(!Action::OpenFeature("PPT Maker".into()).is_exposed_on(Screen::RoleSelect));
        assert!(!Action::SendMessage("hi".into()).is_exposed_on(Screen::Dashboard));
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(Notice::Error("bad".into()).text(), "bad");
        assert!(Notice::Error("bad".into()).is_error());
        assert!(!Notice::Info("ok".into()).is_error());
    }
}
