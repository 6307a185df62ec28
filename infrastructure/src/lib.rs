//! Infrastructure layer for BioGenie
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod backend;
pub mod config;

// Re-export commonly used types
pub use backend::{
    BackendError, GoTrueAuthService, InMemoryAuthService, PublicObjectStorage, SessionStore,
    StoredSession,
};
pub use config::{
    BackendMode, ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig, Severity,
};
