//! Submission workflow
//!
//! Sequences validation, locking, delivery and unlocking around a single
//! submit action, and reports the outcome as a notification.

mod notification;
mod orchestrator;

pub use notification::{Notification, NotificationKind, Notifier};
pub use orchestrator::{
    CompletedSubmission, DeliveryOutcome, PendingSubmission, SubmissionOrchestrator, SubmitError,
    RESPONSE_TIME,
};
