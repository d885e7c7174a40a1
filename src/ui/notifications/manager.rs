// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the registry of active notifications, hands out ids,
//! and ties every entry to exactly one auto-dismiss timer. An entry leaves
//! the registry either when its timer reports expiry or when it is
//! dismissed by hand, whichever comes first; the other path then finds
//! nothing to remove.

use super::notification::{Category, Notification, NotificationId, Request};
use super::scheduler::{Scheduler, TimerHandle};
use crate::config::DEFAULT_NOTIFICATION_DURATION_MS;
use std::fmt;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, trace, warn};

/// Ordered copy of the registry handed to observers (oldest first).
pub type Snapshot = Vec<Notification>;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// The auto-dismiss timer of a notification fired.
    Expired(NotificationId),
}

struct Entry<H> {
    notification: Notification,
    timer: H,
}

/// Manages the registry of active notifications.
pub struct Manager<S: Scheduler> {
    /// Active notifications (oldest first).
    entries: Vec<Entry<S::Handle>>,
    scheduler: S,
    next_id: u64,
    default_duration: Duration,
    observers: watch::Sender<Snapshot>,
}

impl<S: Scheduler> Manager<S> {
    /// Creates an empty manager with the standard 3 second default duration.
    pub fn new(scheduler: S) -> Self {
        Self::with_default_duration(
            scheduler,
            Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS),
        )
    }

    /// Creates an empty manager using `default_duration` for requests that
    /// do not specify one.
    pub fn with_default_duration(scheduler: S, default_duration: Duration) -> Self {
        let (observers, _) = watch::channel(Snapshot::new());
        Self {
            entries: Vec::new(),
            scheduler,
            next_id: 0,
            default_duration,
            observers,
        }
    }

    /// Creates a notification and schedules its auto-dismissal.
    ///
    /// Returns `None` without touching the registry when the request asks
    /// for a negative duration.
    pub fn create(&mut self, request: Request) -> Option<NotificationId> {
        let Request {
            message,
            category,
            duration_ms,
        } = request;

        let duration = match duration_ms.map(u64::try_from) {
            None => self.default_duration,
            Some(Ok(ms)) => Duration::from_millis(ms),
            Some(Err(_)) => {
                debug!(?duration_ms, "ignoring notification with negative duration");
                return None;
            }
        };
        let category = category.unwrap_or_default();

        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        match category {
            Category::Warning => warn!(%id, message = %message, "warning notification"),
            Category::Error => error!(%id, message = %message, "error notification"),
            Category::Success | Category::Info => {
                debug!(%id, %category, ?duration, "notification created");
            }
        }

        let timer = self.scheduler.schedule(id, duration);
        self.entries.push(Entry {
            notification: Notification::new(id, message, category, duration),
            timer,
        });
        self.publish();

        Some(id)
    }

    /// Dismisses a notification by its ID and cancels its timer.
    ///
    /// Returns `true` if the notification was found and removed. Unknown
    /// or already removed ids are ignored.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.remove(id, "dismissed")
    }

    /// Removes a notification whose auto-dismiss timer fired.
    ///
    /// A report for an id that was already dismissed is ignored.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        self.remove(id, "expired")
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Expired(id) => {
                self.expire(id);
            }
        }
    }

    /// Returns the active notifications, oldest first.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|entry| &entry.notification)
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.position(id).map(|index| &self.entries[index].notification)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a receiver that observes every registry change.
    ///
    /// The receiver starts out holding the current contents.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.observers.subscribe()
    }

    /// Returns a copy of the current registry.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.notifications().cloned().collect()
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.notification.id() == id)
    }

    fn remove(&mut self, id: NotificationId, cause: &'static str) -> bool {
        let Some(index) = self.position(id) else {
            trace!(%id, cause, "notification already gone");
            return false;
        };

        let entry = self.entries.remove(index);
        // Cancel even on expiry: the handle may still own runtime resources.
        entry.timer.cancel();
        debug!(%id, cause, "notification removed");
        self.publish();
        true
    }

    fn publish(&self) {
        self.observers.send_replace(self.snapshot());
    }
}

impl<S: Scheduler> Drop for Manager<S> {
    fn drop(&mut self) {
        for entry in self.entries.drain(..) {
            entry.timer.cancel();
        }
    }
}

impl<S: Scheduler + fmt::Debug> fmt::Debug for Manager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("notifications", &self.snapshot())
            .field("scheduler", &self.scheduler)
            .field("default_duration", &self.default_duration)
            .finish_non_exhaustive()
    }
}
