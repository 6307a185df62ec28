//! Application layer for BioGenie
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    auth_service::{AuthError, AuthService, AuthSession, SignUpProfile},
    location::{LocationPort, StaticLocation, is_recovery_fragment},
    object_storage::{ObjectStorage, StorageError},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::resolve_video::ResolveLabVideoUseCase;
pub use use_cases::session_controller::{Dispatch, SessionController, SessionError};
