//! Virtual lab browsing.
//!
//! - [`browser::LabBrowser`]: class → experiment → detail drill-down
//! - [`video::VideoState`]: simulation tab video lookup state

pub mod browser;
pub mod video;
