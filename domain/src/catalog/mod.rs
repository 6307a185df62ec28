//! Static content tables.
//!
//! - [`role::Role`]: dashboard audiences
//! - [`features::FeatureCatalog`]: role → feature cards
//! - [`labs::LabCatalog`]: class → experiments, lab id → teaching content
//!
//! All tables are immutable and compiled in.

pub mod features;
pub mod labs;
pub mod role;
