// SPDX-License-Identifier: MPL-2.0
//! `toastline` is a small application shell built with the Iced GUI framework.
//!
//! Its core is a toast notification manager: timed, dismissible messages
//! kept in insertion order, each tied to a cancellable auto-dismiss timer.
//! Around it sit a hash-style route table, font loading from configured
//! files, an image preview shrunk to fit the screen, and user preferences
//! read from `settings.toml`.

#![doc(html_root_url = "https://docs.rs/toastline/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;
