//! Screen value object

use serde::{Deserialize, Serialize};

/// The single active screen of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Landing,
    Login,
    Signup,
    Reset,
    UpdatePassword,
    RoleSelect,
    Dashboard,
    FeatureDetail,
    LabCatalog,
}

impl Screen {
    pub const ALL: [Screen; 9] = [
        Screen::Landing,
        Screen::Login,
        Screen::Signup,
        Screen::Reset,
        Screen::UpdatePassword,
        Screen::RoleSelect,
        Screen::Dashboard,
        Screen::FeatureDetail,
        Screen::LabCatalog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Login => "login",
            Screen::Signup => "signup",
            Screen::Reset => "reset",
            Screen::UpdatePassword => "update-password",
            Screen::RoleSelect => "role-select",
            Screen::Dashboard => "dashboard",
            Screen::FeatureDetail => "feature-detail",
            Screen::LabCatalog => "lab-catalog",
        }
    }

    /// Fixed screen that "back" leads to.
    ///
    /// This is a static table, not a history stack: the predecessor does not
    /// depend on how the screen was reached.
    pub fn predecessor(&self) -> Screen {
        match self {
            Screen::Landing => Screen::Landing,
            Screen::Login => Screen::Landing,
            Screen::Signup => Screen::Landing,
            Screen::Reset => Screen::Login,
            Screen::UpdatePassword => Screen::Login,
            Screen::RoleSelect => Screen::Landing,
            Screen::Dashboard => Screen::RoleSelect,
            Screen::FeatureDetail => Screen::Dashboard,
            Screen::LabCatalog => Screen::RoleSelect,
        }
    }

    /// Screens that collect credentials
    pub fn is_auth_form(&self) -> bool {
        matches!(
            self,
            Screen::Login | Screen::Signup | Screen::Reset | Screen::UpdatePassword
        )
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
