//! Backend configuration from TOML (`[backend]` section)

use super::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Which auth backend the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    /// Hosted GoTrue/Supabase REST API
    Remote,
    /// Process-local accounts, for offline use and demos
    Memory,
}

impl BackendMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendMode::Remote => "remote",
            BackendMode::Memory => "memory",
        }
    }
}

impl std::fmt::Display for BackendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw backend configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: Option<String>,
    /// Public (anon) API key sent with every request
    pub anon_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// `"remote"` or `"memory"`; unset picks remote when a URL is configured
    pub mode: Option<String>,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            timeout_seconds: 30,
            mode: None,
        }
    }
}

impl FileBackendConfig {
    /// Configured URL, ignoring blank values
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    pub fn anon_key(&self) -> &str {
        self.anon_key.as_deref().unwrap_or_default()
    }

    /// Resolve the backend mode, falling back to in-memory when remote
    /// cannot work.
    pub fn parse_mode(&self) -> (BackendMode, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let auto = if self.url().is_some() {
            BackendMode::Remote
        } else {
            BackendMode::Memory
        };

        let requested = match self.mode.as_deref().map(|m| m.trim().to_lowercase()) {
            None => auto,
            Some(m) if m == "remote" => BackendMode::Remote,
            Some(m) if m == "memory" => BackendMode::Memory,
            Some(other) => {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "backend.mode".to_string(),
                        value: other.clone(),
                        valid_values: vec!["remote".to_string(), "memory".to_string()],
                    },
                    message: format!(
                        "backend.mode: unknown value '{}', falling back to '{}'",
                        other, auto
                    ),
                });
                auto
            }
        };

        if requested == BackendMode::Remote && self.url().is_none() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingValue {
                    field: "backend.url".to_string(),
                },
                message: "backend.mode is 'remote' but backend.url is not set, using the in-memory backend"
                    .to_string(),
            });
            return (BackendMode::Memory, issues);
        }

        (requested, issues)
    }
}
