//! Session domain entities

use serde::{Deserialize, Serialize};

/// Account profile as reported by the auth collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    /// `full_name` from the account's metadata, if it was set at sign-up
    pub full_name: Option<String>,
}

impl Profile {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            full_name: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Name shown in the UI: the full name, or the e-mail when none is stored
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Client-side mirror of the remote authentication state (Entity)
///
/// An anonymous session always has an empty display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
    display_name: String,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(profile: &Profile) -> Self {
        Self {
            authenticated: true,
            display_name: profile.display_name().to_string(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_full_name() {
        let profile = Profile::new("ada@example.com").with_full_name("Ada");
        assert_eq!(profile.display_name(), "Ada");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(Profile::new("ada@example.com").display_name(), "ada@example.com");
        let blank = Profile::new("ada@example.com").with_full_name("  ");
        assert_eq!(blank.display_name(), "ada@example.com");
    }

    #[test]
    fn test_anonymous_session_has_no_name() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.display_name(), "");
    }

    #[test]
    fn test_authenticated_session() {
        let session = Session::authenticated(&Profile::new("x@y.z").with_full_name("Xi"));
        assert!(session.is_authenticated());
        assert_eq!(session.display_name(), "Xi");
    }
}
