// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default lifetime of a toast before it is dismissed automatically (ms).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// Longest default lifetime accepted from the config file or CLI (ms).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Font Defaults
// ==========================================================================

/// Family used for all UI text when the matching font files are available.
pub const DEFAULT_FONT_FAMILY: &str = "Poppins";
