//! Validated form inputs for the credential flows.
//!
//! Every constructor rejects blank fields locally so that no collaborator
//! call is made for a form the user has not filled in.

use super::error::DomainError;

fn require(value: impl Into<String>, field: &'static str) -> Result<String, DomainError> {
    let value = value.into();
    if value.trim().is_empty() {
        Err(DomainError::MissingField(field))
    } else {
        Ok(value)
    }
}

/// E-mail / password pair submitted on the login screen (Value Object)
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn try_new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            email: require(email, "email")?.trim().to_string(),
            password: require(password, "password")?,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep the password out of debug output and logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sign-up form: full name plus credentials (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    full_name: String,
    credentials: Credentials,
}

impl SignupForm {
    pub fn try_new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let full_name = require(full_name, "name")?.trim().to_string();
        Ok(Self {
            full_name,
            credentials: Credentials::try_new(email, password)?,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Address a password-reset link is sent to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetRequest {
    email: String,
}

impl ResetRequest {
    pub fn try_new(email: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            email: require(email, "email")?.trim().to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Replacement password entered on the update-password screen
#[derive(Clone, PartialEq, Eq)]
pub struct NewPassword(String);

impl NewPassword {
    pub fn try_new(password: impl Into<String>) -> Result<Self, DomainError> {
        require(password, "new password").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for NewPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NewPassword(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_valid() {
        let creds = Credentials::try_new(" ada@example.com ", "s3cret").unwrap();
        assert_eq!(creds.email(), "ada@example.com");
        assert_eq!(creds.password(), "s3cret");
    }

    #[test]
    fn test_credentials_blank_fields() {
        assert_eq!(
            Credentials::try_new("", "pw").unwrap_err(),
            DomainError::MissingField("email")
        );
        assert_eq!(
            Credentials::try_new("ada@example.com", "   ").unwrap_err(),
            DomainError::MissingField("password")
        );
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let creds = Credentials::try_new("a@b.c", " pw ").unwrap();
        assert_eq!(creds.password(), " pw ");
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::try_new("a@b.c", "hunter2").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("hunter2"));
        assert!(!format!("{:?}", NewPassword::try_new("hunter2").unwrap()).contains("hunter2"));
    }

    #[test]
    fn test_signup_form_debug_hides_password() {
        let form = SignupForm::try_new("Ada Lovelace", "ada@example.com", "hunter2").unwrap();
        let debug = format!("{:?}", form);
        assert!(debug.contains("ada@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_signup_requires_name_first() {
        assert_eq!(
            SignupForm::try_new(" ", "", "").unwrap_err(),
            DomainError::MissingField("name")
        );
        let form = SignupForm::try_new("Ada Lovelace", "ada@example.com", "pw").unwrap();
        assert_eq!(form.full_name(), "Ada Lovelace");
        assert_eq!(form.credentials().email(), "ada@example.com");
    }

    #[test]
    fn test_reset_and_new_password() {
        assert!(ResetRequest::try_new("").is_err());
        assert_eq!(ResetRequest::try_new("x@y.z").unwrap().email(), "x@y.z");
        assert!(NewPassword::try_new("\t").is_err());
        assert_eq!(NewPassword::try_new("pw").unwrap().as_str(), "pw");
    }
}
