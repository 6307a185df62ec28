//! Client navigation as a finite-state store.
//!
//! - [`screen::Screen`]: the active screen and its fixed "back" target
//! - [`action::Action`]: intents and collaborator completions
//! - [`state::AppState`] / [`state::reduce`]: the state and its reducer

pub mod action;
pub mod screen;
pub mod state;
