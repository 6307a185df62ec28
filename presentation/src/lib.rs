//! Presentation layer for BioGenie
//!
//! This crate contains CLI definitions, the console renderer,
//! progress reporters, and the interactive shell.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod shell;

// Re-export commonly used types
pub use cli::commands::{BackendArg, Cli};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use shell::{Shell, ShellCommand};
