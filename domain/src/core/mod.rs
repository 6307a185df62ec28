//! Core domain concepts shared across all subdomains.
//!
//! - [`credentials`]: validated form inputs for the auth flows
//! - [`error::DomainError`]: domain-level errors

pub mod credentials;
pub mod error;
