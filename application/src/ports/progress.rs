//! Progress notification port
//!
//! Lets the presentation layer show activity while a collaborator call is
//! in flight.

use biogenie_domain::PendingOperation;

/// Callback for collaborator call lifecycle
///
/// Implementations live in the presentation layer (spinner, status line, ...).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the collaborator is invoked
    fn on_operation_start(&self, operation: PendingOperation);

    /// Called once the collaborator has answered
    fn on_operation_complete(&self, operation: PendingOperation, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_operation_start(&self, _operation: PendingOperation) {}
    fn on_operation_complete(&self, _operation: PendingOperation, _success: bool) {}
}
