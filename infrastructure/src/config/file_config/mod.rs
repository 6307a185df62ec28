//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on
//! demand.

mod auth;
mod backend;
mod labs;
mod logging;
mod output;
mod repl;

pub use auth::FileAuthConfig;
pub use backend::{BackendMode, FileBackendConfig};
pub use labs::FileLabsConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use biogenie_application::BehaviorConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a fallback value is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    MissingValue {
        field: String,
    },
    EmptyValue {
        field: String,
    },
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Auth/storage backend location
    pub backend: FileBackendConfig,
    /// Session and password-reset settings
    pub auth: FileAuthConfig,
    /// Virtual lab video settings
    pub labs: FileLabsConfig,
    /// Interactive shell settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.backend.parse_mode().1);

        if self.backend.timeout_seconds == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyValue {
                    field: "backend.timeout_seconds".to_string(),
                },
                message: "backend.timeout_seconds cannot be 0".to_string(),
            });
        }

        if self.labs.video_bucket.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EmptyValue {
                    field: "labs.video_bucket".to_string(),
                },
                message: "labs.video_bucket is empty, simulation videos will be unavailable"
                    .to_string(),
            });
        }

        issues
    }

    /// Settings the application layer needs
    pub fn behavior(&self) -> BehaviorConfig {
        BehaviorConfig::default()
            .with_reset_redirect(self.auth.reset_redirect.clone())
            .with_video_bucket(self.labs.video_bucket.trim())
            .with_verify_videos(self.labs.verify_videos)
    }

    /// Where the signed-in session is persisted, or `None` when
    /// persistence is disabled
    pub fn session_file(&self) -> Option<PathBuf> {
        if !self.auth.persist_session {
            return None;
        }
        match &self.auth.session_file {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|d| d.join("biogenie").join("session.json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
url = "https://abc.supabase.co"
anon_key = "public-anon-key"
timeout_seconds = 10

[auth]
reset_redirect = "https://biogenie.app/"
persist_session = false

[labs]
video_bucket = "sim-videos"
verify_videos = true

[repl]
show_progress = false
history_file = "~/.local/share/biogenie/history.txt"

[output]
color = false

[logging]
file = true
directory = "/var/log/biogenie"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.backend.url(), Some("https://abc.supabase.co"));
        assert_eq!(config.backend.anon_key(), "public-anon-key");
        assert_eq!(config.backend.timeout_seconds, 10);
        assert_eq!(config.backend.parse_mode().0, BackendMode::Remote);
        assert!(!config.auth.persist_session);
        assert!(config.session_file().is_none());
        assert!(!config.repl.show_progress);
        assert!(!config.output.color);
        assert!(config.logging.file);
        assert_eq!(
            config.logging.log_dir(),
            Some(PathBuf::from("/var/log/biogenie"))
        );

        let behavior = config.behavior();
        assert_eq!(behavior.reset_redirect, "https://biogenie.app/");
        assert_eq!(behavior.video_bucket, "sim-videos");
        assert!(behavior.verify_videos);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml_str = r#"
[labs]
verify_videos = true
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();

        assert!(config.labs.verify_videos);
        assert_eq!(config.labs.video_bucket, "lab-videos");
        assert_eq!(config.backend.timeout_seconds, 30);
        assert_eq!(config.auth.reset_redirect, "http://localhost:5173/");
        assert!(config.auth.persist_session);
        assert!(config.repl.show_progress);
        assert!(config.output.color);
        assert!(!config.logging.file);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.backend.parse_mode().0, BackendMode::Memory);
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let toml_str = r#"
[backend]
mode = "remote"
timeout_seconds = 0

[labs]
video_bucket = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert_eq!(issues.len(), 3);
        assert!(issues.iter().any(|i| i.severity == Severity::Error));
        assert!(
            issues
                .iter()
                .any(|i| matches!(&i.code, ConfigIssueCode::MissingValue { field } if field == "backend.url"))
        );
    }

    #[test]
    fn test_session_file_override() {
        let toml_str = r#"
[auth]
session_file = "/tmp/bg-session.json"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.session_file(),
            Some(PathBuf::from("/tmp/bg-session.json"))
        );
    }
}
