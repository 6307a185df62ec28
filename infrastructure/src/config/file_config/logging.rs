//! Log file configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write logs to a daily-rotated file
    pub file: bool,
    /// Directory for log files; defaults to the user data directory
    pub directory: Option<String>,
}

impl FileLoggingConfig {
    /// Directory log files go to when file logging is enabled
    pub fn log_dir(&self) -> Option<PathBuf> {
        match &self.directory {
            Some(dir) => Some(PathBuf::from(dir)),
            None => dirs::data_dir().map(|d| d.join("biogenie").join("logs")),
        }
    }
}
