// SPDX-License-Identifier: MPL-2.0
//! Image loading for the preview on the home screen.
//!
//! Files are picked with the native dialog, read asynchronously, and
//! shrunk to fit [`fit::MAX_WIDTH`] x [`fit::MAX_HEIGHT`] before they reach
//! the renderer.

pub mod fit;

use crate::error::{Error, Result};
use iced::widget::image;
use std::io;
use std::path::{Path, PathBuf};

pub use fit::FittedImage;

pub mod extensions {
    /// Image file extensions accepted by the loader.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];
}

/// An image ready to be displayed.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_fitted(fitted: &FittedImage) -> Self {
        Self {
            handle: image::Handle::from_rgba(fitted.width, fitted.height, fitted.pixels.clone()),
            width: fitted.width,
            height: fitted.height,
        }
    }
}

/// Returns true if the extension names a supported image format.
#[must_use]
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions::IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Reads an image file and shrinks it to the display bounds.
///
/// Non-image extensions are rejected before touching the disk.
pub async fn load_fitted(path: PathBuf) -> Result<FittedImage> {
    if !is_image_path(&path) {
        return Err(Error::UnsupportedMedia(path.display().to_string()));
    }

    let bytes = tokio::fs::read(&path).await.map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.display().to_string()),
        _ => Error::Io(format!("{}: {err}", path.display())),
    })?;

    fit::fit_to_bounds(&bytes, fit::MAX_WIDTH, fit::MAX_HEIGHT)
}

/// Shows the native open dialog filtered to images.
///
/// Returns `None` if the user cancelled.
pub async fn pick_image() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Open Image")
        .add_filter("Images", extensions::IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
