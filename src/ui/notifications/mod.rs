// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions (save
//! success, errors, etc.) without blocking interaction. Each one is removed
//! automatically once its duration elapses, or earlier when dismissed.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Category` and the `Request` builder
//! - [`manager`] - `Manager` owning the registry and its timers
//! - [`scheduler`] - timer backends (Iced tasks, Tokio, virtual clock)
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use toastline::ui::notifications::{Manager, Request, TaskScheduler};
//!
//! // The composition root owns the one manager instance
//! let mut manager = Manager::new(TaskScheduler::new());
//!
//! // Show a toast for the default 3 seconds
//! manager.create(Request::success("Image saved"));
//!
//! // Hand the pending timers to the runtime; they come back as `Expired`
//! let timers = manager.scheduler_mut().take_tasks().map(NotificationMessage::Expired);
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```

pub mod manager;
pub mod notification;
pub mod scheduler;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Snapshot};
pub use notification::{Category, Notification, NotificationId, Request};
pub use scheduler::{
    Expirations, ManualScheduler, Scheduler, TaskScheduler, TimerHandle, TokioScheduler,
};
pub use toast::Toast;
