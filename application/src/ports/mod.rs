//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod auth_service;
pub mod location;
pub mod object_storage;
pub mod progress;
