//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please fill in all fields ({0} is required)")]
    MissingField(&'static str),

    #[error("Unknown lab tab: {0}")]
    UnknownTab(String),
}

impl DomainError {
    /// Check if this error was raised by local form validation
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::MissingField(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = DomainError::MissingField("email");
        assert_eq!(
            error.to_string(),
            "Please fill in all fields (email is required)"
        );
    }

    #[test]
    fn test_is_validation_check() {
        assert!(DomainError::MissingField("password").is_validation());
        assert!(!DomainError::UnknownTab("video".to_string()).is_validation());
    }
}
