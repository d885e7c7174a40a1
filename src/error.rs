// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! The notification manager itself never fails: rejected requests and
//! unknown ids are no-ops. Errors only come from the application shell
//! (configuration files, font assets, image previews).

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    /// A font file could not be read or registered.
    #[error("Font Error: {0}")]
    Font(String),
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Not an image: {0}")]
    UnsupportedMedia(String),
    /// Decoding, resizing or encoding failed.
    #[error("Image Error: {0}")]
    Image(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
