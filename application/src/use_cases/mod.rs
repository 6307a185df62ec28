//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod resolve_video;
pub mod session_controller;
