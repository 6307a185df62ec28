//! Progress reporting while the backend is working

use biogenie_application::ProgressNotifier;
use biogenie_domain::PendingOperation;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Reports backend calls with a spinner
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn slot(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.spinner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// What the user sees while `operation` is in flight
    pub fn activity(operation: PendingOperation) -> &'static str {
        match operation {
            PendingOperation::SessionRestore => "Checking for a saved session...",
            PendingOperation::Login => "Signing in...",
            PendingOperation::Signup => "Creating your account...",
            PendingOperation::PasswordReset => "Sending reset link...",
            PendingOperation::PasswordUpdate => "Updating password...",
        }
    }

    /// Start a spinner with an arbitrary message
    pub fn start(&self, message: impl Into<String>) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(80));
        if let Some(previous) = self.slot().replace(pb) {
            previous.finish_and_clear();
        }
    }

    /// Stop the spinner, if any
    pub fn stop(&self) {
        if let Some(pb) = self.slot().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_operation_start(&self, operation: PendingOperation) {
        self.start(Self::activity(operation));
    }

    fn on_operation_complete(&self, _operation: PendingOperation, _success: bool) {
        self.stop();
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_operation_start(&self, operation: PendingOperation) {
        println!("{} {}", "->".cyan(), ProgressReporter::activity(operation));
    }

    fn on_operation_complete(&self, _operation: PendingOperation, success: bool) {
        if success {
            println!("  {} done", "v".green());
        } else {
            println!("  {} failed", "x".red());
        }
    }
}
