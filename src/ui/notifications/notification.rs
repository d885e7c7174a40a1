// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` value shown to observers, the
//! `Category` it is styled by, and the `Request` callers submit to the
//! manager.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Ids are handed out by a [`Manager`](super::Manager) from a monotonically
/// increasing counter and are never reused by that manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category determines the visual styling of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Category {
    /// Every category, in the order the playground lists them.
    pub const ALL: [Category; 4] = [
        Category::Success,
        Category::Error,
        Category::Warning,
        Category::Info,
    ];

    /// Returns the accent color for this category.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Category::Success => palette::SUCCESS_500,
            Category::Error => palette::ERROR_500,
            Category::Warning => palette::WARNING_500,
            Category::Info => palette::INFO_500,
        }
    }

    /// Short glyph rendered in front of the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Success => "✔",
            Category::Error => "✖",
            Category::Warning => "⚠",
            Category::Info => "ℹ",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Info => "info",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A request to show a notification.
///
/// The duration is a signed millisecond count: negative values are
/// representable so that the manager can reject them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub(super) message: String,
    pub(super) category: Option<Category>,
    pub(super) duration_ms: Option<i64>,
}

impl Request {
    /// Creates a request with the default category and duration.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: None,
            duration_ms: None,
        }
    }

    /// Creates a success request.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).category(Category::Success)
    }

    /// Creates an info request.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).category(Category::Info)
    }

    /// Creates a warning request.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).category(Category::Warning)
    }

    /// Creates an error request.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).category(Category::Error)
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Overrides the manager's default auto-dismiss delay.
    ///
    /// A negative value makes the request a no-op; zero dismisses on the
    /// scheduler's next tick.
    #[must_use]
    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A notification currently held by the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    message: String,
    category: Category,
    duration: Duration,
}

impl Notification {
    pub(super) fn new(
        id: NotificationId,
        message: String,
        category: Category,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            message,
            category,
            duration,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the auto-dismiss delay the notification was accepted with.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
