//! Transient user-visible notifications

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// How long outcome notifications stay on screen
pub const OUTCOME_DURATION: Duration = Duration::from_millis(5000);

/// How long informational notifications stay on screen
pub const INFO_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
            duration: OUTCOME_DURATION,
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: title.into(),
            description: description.into(),
            duration: OUTCOME_DURATION,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            description: description.into(),
            duration: INFO_DURATION,
        }
    }
}

/// Sending half of the notification channel
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn emit(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            debug!("Notification dropped, no receiver");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_receiver() {
        let (notifier, mut rx) = Notifier::channel();
        notifier.emit(Notification::info("Copied", "Link on clipboard"));

        let received = rx.try_recv().unwrap();
        assert_eq!(received.kind, NotificationKind::Info);
        assert_eq!(received.title, "Copied");
        assert_eq!(received.duration, INFO_DURATION);
    }

    #[test]
    fn test_emit_without_receiver_does_not_panic() {
        let (notifier, rx) = Notifier::channel();
        drop(rx);
        notifier.emit(Notification::success("Sent", ""));
    }

    #[test]
    fn test_outcome_durations() {
        assert_eq!(Notification::success("a", "b").duration, OUTCOME_DURATION);
        assert_eq!(Notification::failure("a", "b").duration, OUTCOME_DURATION);
    }
}
