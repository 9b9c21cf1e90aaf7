//! Toast stack for transient notifications

use crate::submission::Notification;
use std::collections::VecDeque;
use std::time::Instant;

/// Oldest toasts are dropped beyond this many
const MAX_TOASTS: usize = 3;

/// A notification on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.notification.duration
    }
}

/// Notifications currently displayed, newest last
#[derive(Debug, Default)]
pub struct Toasts {
    items: VecDeque<Toast>,
}

impl Toasts {
    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        self.items.push_back(Toast {
            notification,
            shown_at: now,
        });
        while self.items.len() > MAX_TOASTS {
            self.items.pop_front();
        }
    }

    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    /// Drop every toast whose duration has elapsed
    pub fn prune_at(&mut self, now: Instant) {
        self.items.retain(|toast| !toast.is_expired_at(now));
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
