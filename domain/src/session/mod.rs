//! Authentication session domain.
//!
//! - [`entities::Session`]: the authenticated-user state shown by the client
//! - [`entities::Profile`]: account data reported by the auth collaborator

pub mod entities;
