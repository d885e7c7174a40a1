// SPDX-License-Identifier: MPL-2.0
//! Font loading at startup.
//!
//! Font files listed under `[fonts]` are read from disk once and handed to
//! the renderer. Unreadable files do not stop startup; they are reported
//! back so the app can show a warning toast.

use super::Message;
use crate::config::DEFAULT_FONT_FAMILY;
use crate::error::{Error, Result};
use iced::{Font, Task};
use std::path::{Path, PathBuf};

/// Font used for all UI text. Falls back to the system font when the
/// family was not registered.
#[must_use]
pub fn default_font() -> Font {
    Font::with_name(DEFAULT_FONT_FAMILY)
}

/// Reads every configured font file.
///
/// Returns one registration task per readable file and the errors for the
/// others.
pub fn load_all(files: &[PathBuf]) -> (Task<Message>, Vec<Error>) {
    let mut tasks = Vec::with_capacity(files.len());
    let mut errors = Vec::new();

    for path in files {
        match read_font(path) {
            Ok(bytes) => {
                let path = path.clone();
                tasks.push(
                    iced::font::load(bytes)
                        .map(move |result| Message::FontLoaded {
                            path: path.clone(),
                            result,
                        }),
                );
            }
            Err(err) => errors.push(err),
        }
    }

    (Task::batch(tasks), errors)
}

fn read_font(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)
        .map_err(|err| Error::Font(format!("{}: {err}", path.display())))?;
    if bytes.is_empty() {
        return Err(Error::Font(format!("{}: file is empty", path.display())));
    }
    Ok(bytes)
}
