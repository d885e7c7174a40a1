// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::FittedImage;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::playground;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Playground(playground::Message),
    Notification(notifications::NotificationMessage),
    /// Result of registering a font file with the renderer.
    FontLoaded {
        path: PathBuf,
        result: Result<(), iced::font::Error>,
    },
    /// Show the open dialog for the image preview.
    OpenImage,
    /// The open dialog closed; `None` when cancelled.
    ImagePicked(Option<PathBuf>),
    ImageLoaded {
        path: PathBuf,
        result: Result<FittedImage, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Initial route, e.g. `#/playground`.
    pub route: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TOASTLINE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Overrides the configured default toast lifetime (milliseconds).
    pub duration_ms: Option<u64>,
}
