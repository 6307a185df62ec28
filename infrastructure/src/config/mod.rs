//! Configuration file loading for BioGenie
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BIOGENIE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./biogenie.toml` or `./.biogenie.toml`
//! 4. Global: `$XDG_CONFIG_HOME/biogenie/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    BackendMode, ConfigIssue, ConfigIssueCode, FileAuthConfig, FileBackendConfig, FileConfig,
    FileLabsConfig, FileLoggingConfig, FileOutputConfig, FileReplConfig, Severity,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
