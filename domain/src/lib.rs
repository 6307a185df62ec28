//! Domain layer for BioGenie
//!
//! This crate contains the client's state model, static content tables and
//! value objects. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Navigation
//!
//! The client shows exactly one [`Screen`] at a time. All state lives in a
//! single [`AppState`] that changes only through the pure [`reduce`]
//! function, one [`Action`] at a time.
//!
//! ## Catalogs
//!
//! - **Feature catalog**: the "gems" (tool cards) offered to each [`Role`]
//! - **Lab catalog**: classes, experiments and per-lab teaching content

pub mod catalog;
pub mod chat;
pub mod core;
pub mod labs;
pub mod navigation;
pub mod session;

// Re-export commonly used types
pub use catalog::{
    features::{FeatureCard, FeatureCatalog},
    labs::{ExperimentKind, ExperimentSummary, LabCatalog, LabClass, LabDetail, VivaPair},
    role::Role,
};
pub use chat::transcript::{ASSISTANT_PLACEHOLDER, ChatEntry, ChatTranscript, Speaker};
pub use core::{
    credentials::{Credentials, NewPassword, ResetRequest, SignupForm},
    error::DomainError,
};
pub use labs::{
    browser::{LabBrowser, LabTab, LabView},
    video::{VideoState, video_object_key},
};
pub use navigation::{
    action::{Action, Notice, PendingOperation},
    screen::Screen,
    state::{AppState, reduce},
};
pub use session::entities::{Profile, Session};
