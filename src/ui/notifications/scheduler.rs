// SPDX-License-Identifier: MPL-2.0
//! Deferred-callback backends for auto-dismissal.
//!
//! A [`Scheduler`] turns "remove this notification after `delay`" into a
//! later report carrying the notification id. Timers never touch the
//! registry themselves: the owner of the [`Manager`](super::Manager)
//! receives the report and calls [`Manager::expire`](super::Manager::expire),
//! which keeps every registry mutation on one logical thread.
//!
//! # Backends
//!
//! - [`TaskScheduler`] - abortable Iced tasks, drained by the application's
//!   `update` loop.
//! - [`TokioScheduler`] - spawned Tokio tasks reporting through an
//!   [`Expirations`] channel, for headless owners.
//! - [`ManualScheduler`] - virtual clock advanced by hand.

use super::notification::NotificationId;
use iced::task;
use iced::Task;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tokio::sync::mpsc;

/// Cancellation side of a scheduled timer.
///
/// `cancel` must be idempotent and harmless after the timer has fired.
pub trait TimerHandle {
    fn cancel(&self);
}

/// Schedules one-shot expiry reports.
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Arranges for `id` to be reported as expired once `delay` has elapsed.
    fn schedule(&mut self, id: NotificationId, delay: Duration) -> Self::Handle;
}

impl TimerHandle for tokio::task::AbortHandle {
    fn cancel(&self) {
        self.abort();
    }
}

impl TimerHandle for task::Handle {
    fn cancel(&self) {
        self.abort();
    }
}

// =============================================================================
// Iced tasks
// =============================================================================

/// Scheduler backed by abortable Iced tasks.
///
/// Each timer becomes a `Task` that sleeps and then yields the id. Tasks
/// accumulate until the application collects them with
/// [`take_tasks`](Self::take_tasks) and hands them to the runtime.
#[derive(Default)]
pub struct TaskScheduler {
    pending: Vec<Task<NotificationId>>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of timers not yet handed to the runtime.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Drains queued timers into a single batched task.
    pub fn take_tasks(&mut self) -> Task<NotificationId> {
        Task::batch(std::mem::take(&mut self.pending))
    }
}

impl fmt::Debug for TaskScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl Scheduler for TaskScheduler {
    type Handle = task::Handle;

    fn schedule(&mut self, id: NotificationId, delay: Duration) -> task::Handle {
        // The sleep is created lazily so no runtime is needed until the task runs.
        let (timer, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| id,
        )
        .abortable();
        self.pending.push(timer);
        handle
    }
}

// =============================================================================
// Tokio tasks
// =============================================================================

/// Scheduler backed by spawned Tokio tasks.
///
/// Must be used from within a Tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    sender: mpsc::UnboundedSender<NotificationId>,
}

/// Receiving side of a [`TokioScheduler`].
#[derive(Debug)]
pub struct Expirations {
    receiver: mpsc::UnboundedReceiver<NotificationId>,
}

impl TokioScheduler {
    /// Creates a scheduler and the channel its timers report on.
    #[must_use]
    pub fn new() -> (Self, Expirations) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, Expirations { receiver })
    }
}

impl Scheduler for TokioScheduler {
    type Handle = tokio::task::AbortHandle;

    fn schedule(&mut self, id: NotificationId, delay: Duration) -> tokio::task::AbortHandle {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the owner shuts down.
            let _ = sender.send(id);
        })
        .abort_handle()
    }
}

impl Expirations {
    /// Waits for the next fired timer.
    ///
    /// Returns `None` once every scheduler clone has been dropped.
    pub async fn next(&mut self) -> Option<NotificationId> {
        self.receiver.recv().await
    }

    /// Returns an already fired timer without waiting.
    pub fn try_next(&mut self) -> Option<NotificationId> {
        self.receiver.try_recv().ok()
    }
}

// =============================================================================
// Virtual clock
// =============================================================================

/// Scheduler driven by an explicit virtual clock.
///
/// Clones share the same clock, so a caller can keep one clone while the
/// manager owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    sequence: u64,
    /// Keyed by (deadline, schedule order).
    timers: BTreeMap<(Duration, u64), NotificationId>,
}

/// Handle to a timer registered with a [`ManualScheduler`].
#[derive(Debug)]
pub struct ManualHandle {
    key: (Duration, u64),
    clock: Weak<RefCell<ManualClock>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of timers that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Moves the clock forward and returns the ids whose deadlines were
    /// reached, earliest deadline first.
    ///
    /// `advance(Duration::ZERO)` acts as a single scheduler tick.
    pub fn advance(&self, by: Duration) -> Vec<NotificationId> {
        let mut clock = self.clock.borrow_mut();
        clock.now += by;
        let cutoff = (clock.now, u64::MAX);
        let remaining = clock.timers.split_off(&cutoff);
        let fired = std::mem::replace(&mut clock.timers, remaining);
        fired.into_values().collect()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&mut self, id: NotificationId, delay: Duration) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let key = (clock.now + delay, clock.sequence);
        clock.sequence += 1;
        clock.timers.insert(key, id);
        ManualHandle {
            key,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

impl TimerHandle for ManualHandle {
    fn cancel(&self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().timers.remove(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> NotificationId {
        NotificationId::from_raw(raw)
    }

    #[test]
    fn manual_timers_fire_in_deadline_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(id(1), Duration::from_millis(300));
        scheduler.schedule(id(2), Duration::from_millis(100));
        scheduler.schedule(id(3), Duration::from_millis(200));

        assert_eq!(
            scheduler.advance(Duration::from_millis(250)),
            vec![id(2), id(3)]
        );
        assert_eq!(scheduler.advance(Duration::from_millis(50)), vec![id(1)]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn manual_timers_with_equal_deadlines_keep_schedule_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(id(5), Duration::from_millis(10));
        scheduler.schedule(id(4), Duration::from_millis(10));

        assert_eq!(scheduler.advance(Duration::from_millis(10)), vec![id(5), id(4)]);
    }

    #[test]
    fn manual_timer_does_not_fire_before_deadline() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(id(1), Duration::from_millis(100));

        assert!(scheduler.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(scheduler.now(), Duration::from_millis(99));
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![id(1)]);
    }

    #[test]
    fn zero_delay_fires_on_next_tick() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(id(1), Duration::ZERO);

        assert_eq!(scheduler.advance(Duration::ZERO), vec![id(1)]);
    }

    #[test]
    fn cancelled_manual_timer_never_fires() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(id(1), Duration::from_millis(100));
        handle.cancel();
        handle.cancel();

        assert_eq!(scheduler.pending(), 0);
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn cancel_after_fire_is_harmless() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(id(1), Duration::from_millis(100));
        scheduler.schedule(id(2), Duration::from_millis(500));

        assert_eq!(scheduler.advance(Duration::from_millis(100)), vec![id(1)]);
        handle.cancel();
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn task_scheduler_queues_until_taken() {
        let mut scheduler = TaskScheduler::new();
        let _first = scheduler.schedule(id(1), Duration::from_millis(100));
        let _second = scheduler.schedule(id(2), Duration::from_millis(100));
        assert_eq!(scheduler.pending_count(), 2);

        let _batch = scheduler.take_tasks();
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn task_timer_cancelled_before_hand_off_is_aborted() {
        let mut scheduler = TaskScheduler::new();
        let dismissed = scheduler.schedule(id(1), Duration::from_millis(100));
        let kept = scheduler.schedule(id(2), Duration::from_millis(100));

        dismissed.cancel();
        let _batch = scheduler.take_tasks();

        // The runtime drops an aborted task without yielding its id.
        assert!(dismissed.is_aborted());
        assert!(!kept.is_aborted());
    }

    #[test]
    fn task_timer_cancel_is_idempotent_after_hand_off() {
        let mut scheduler = TaskScheduler::new();
        let handle = scheduler.schedule(id(1), Duration::ZERO);
        let _batch = scheduler.take_tasks();

        handle.cancel();
        handle.cancel();
        assert!(handle.is_aborted());
    }
}
