// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen exposes its own `Message`, and reports anything the application
//! must act on as an `Event`/`Effect` value.
//!
//! # Screens
//!
//! - [`playground`] - Compose and fire toasts
//! - [`about`] - Application version and license
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Route links shown above every screen
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod playground;
pub mod theming;
