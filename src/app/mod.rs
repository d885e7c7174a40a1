// SPDX-License-Identifier: MPL-2.0
//! Application root state and bootstrap.
//!
//! The `App` struct is the composition root: it loads the configuration,
//! registers fonts, picks the initial route, and owns the single toast
//! [`Manager`](notifications::Manager). Every notification created
//! anywhere in the UI flows through `App::update`, and the timers the
//! manager schedules are handed back to the Iced runtime from there.

mod fonts;
mod message;
pub mod paths;
mod screen;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::error::Result;
use crate::media::{self, ImageData};
use crate::ui::navbar;
use crate::ui::notifications::{self, NotificationMessage, Request, TaskScheduler};
use crate::ui::playground;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Root Iced application state.
pub struct App {
    screen: Screen,
    theme: Theme,
    playground: playground::State,
    /// Last image opened from the home screen.
    preview: Option<ImageData>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager<TaskScheduler>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("preview", &self.preview.as_ref().map(|p| (p.width, p.height)))
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure, but flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .default_font(fonts::default_font())
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_default_duration(Duration::from_millis(config::DEFAULT_NOTIFICATION_DURATION_MS))
    }
}

impl App {
    fn with_default_duration(default_duration: Duration) -> Self {
        Self {
            screen: Screen::default(),
            theme: Theme::Dark,
            playground: playground::State::new(),
            preview: None,
            notifications: notifications::Manager::with_default_duration(
                TaskScheduler::new(),
                default_duration,
            ),
        }
    }

    /// Initializes application state from the CLI flags and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));

        let default_duration = match flags.duration_ms {
            Some(ms) => Duration::from_millis(ms.min(config::MAX_NOTIFICATION_DURATION_MS)),
            None => config.notifications.default_duration(),
        };

        let mut app = Self::with_default_duration(default_duration);
        app.theme = config.general.theme_mode.resolve();

        if let Some(warning) = config_warning {
            app.notifications.create(Request::warning(warning));
        }

        if let Some(route) = flags.route.as_deref() {
            match Screen::from_path(route) {
                Some(screen) => app.screen = screen,
                None => {
                    app.notifications
                        .create(Request::warning(format!("Unknown route {route}")));
                }
            }
        }

        let (font_tasks, font_errors) = fonts::load_all(&config.fonts.files);
        for err in font_errors {
            app.notifications.create(Request::warning(err.to_string()));
        }

        info!(
            route = app.screen.path(),
            default_duration_ms = default_duration.as_millis() as u64,
            "application started"
        );

        let timers = app.take_timers();
        (app, Task::batch([font_tasks, timers]))
    }

    fn title(&self) -> String {
        format!("{} - Toastline", self.screen.label())
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => {
                if let navbar::Event::Navigate(screen) = navbar::update(navbar_message, self.screen) {
                    debug!(from = self.screen.path(), to = screen.path(), "navigating");
                    self.screen = screen;
                }
                Task::none()
            }
            Message::Playground(playground_message) => {
                match self.playground.update(playground_message) {
                    playground::Effect::None => {}
                    playground::Effect::Create(request) => {
                        self.notifications.create(request);
                    }
                    playground::Effect::InvalidDuration(input) => {
                        self.notifications.create(Request::error(format!(
                            "\"{input}\" is not a whole number of milliseconds"
                        )));
                    }
                }
                self.take_timers()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::FontLoaded { path, result } => {
                match result {
                    Ok(()) => debug!(path = %path.display(), "font registered"),
                    Err(err) => {
                        warn!(path = %path.display(), ?err, "font registration failed");
                        self.notifications.create(Request::warning(format!(
                            "Could not register font {}",
                            path.display()
                        )));
                    }
                }
                self.take_timers()
            }
            Message::OpenImage => Task::perform(media::pick_image(), Message::ImagePicked),
            Message::ImagePicked(None) => Task::none(),
            Message::ImagePicked(Some(path)) => {
                debug!(path = %path.display(), "loading image");
                Task::perform(media::load_fitted(path.clone()), move |result| {
                    Message::ImageLoaded {
                        path: path.clone(),
                        result,
                    }
                })
            }
            Message::ImageLoaded { path, result } => {
                self.handle_image_loaded(&path, result);
                self.take_timers()
            }
        }
    }

    /// Shows a loaded preview, or an error toast explaining why it failed.
    fn handle_image_loaded(&mut self, path: &Path, result: Result<media::FittedImage>) {
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

        match result {
            Ok(fitted) => {
                info!(
                    path = %path.display(),
                    width = fitted.width,
                    height = fitted.height,
                    resized = fitted.was_resized(),
                    "image opened"
                );
                let message = if fitted.was_resized() {
                    format!(
                        "Opened {name} at {}x{} (scaled down from {}x{})",
                        fitted.width, fitted.height, fitted.source_width, fitted.source_height
                    )
                } else {
                    format!("Opened {name} at {}x{}", fitted.width, fitted.height)
                };
                self.preview = Some(ImageData::from_fitted(&fitted));
                self.notifications.create(Request::success(message));
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "image could not be opened");
                self.notifications.create(Request::error(err.to_string()));
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            playground: &self.playground,
            preview: self.preview.as_ref(),
            notifications: &self.notifications,
        })
    }

    /// Hands freshly scheduled auto-dismiss timers to the runtime.
    fn take_timers(&mut self) -> Task<Message> {
        self.notifications
            .scheduler_mut()
            .take_tasks()
            .map(|id| Message::Notification(NotificationMessage::Expired(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::media::FittedImage;
    use crate::ui::notifications::Category;

    fn submit(app: &mut App, message: &str, duration: &str) {
        let _ = app.update(Message::Playground(playground::Message::MessageChanged(
            message.to_string(),
        )));
        let _ = app.update(Message::Playground(playground::Message::DurationChanged(
            duration.to_string(),
        )));
        let _ = app.update(Message::Playground(playground::Message::Submit));
    }

    #[test]
    fn default_app_starts_on_home_without_toasts() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Home);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn navbar_switches_screen() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Open(Screen::About)));
        assert_eq!(app.screen, Screen::About);
        assert_eq!(app.title(), "About - Toastline");
    }

    #[test]
    fn playground_submit_creates_toast_and_hands_off_timer() {
        let mut app = App::default();
        submit(&mut app, "Saved", "");

        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.notifications.scheduler().pending_count(), 0);
    }

    #[test]
    fn negative_duration_from_playground_is_ignored() {
        let mut app = App::default();
        submit(&mut app, "x", "-1");

        assert!(app.notifications.is_empty());
    }

    #[test]
    fn invalid_duration_shows_error_toast() {
        let mut app = App::default();
        submit(&mut app, "x", "later");

        let toasts: Vec<_> = app.notifications.notifications().collect();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].category(), Category::Error);
    }

    #[test]
    fn expired_message_removes_toast() {
        let mut app = App::default();
        submit(&mut app, "Saved", "");
        let id = app.notifications.notifications().next().unwrap().id();

        let _ = app.update(Message::Notification(NotificationMessage::Expired(id)));
        assert!(app.notifications.is_empty());

        // The dismiss button of a toast that already expired does nothing.
        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        assert!(app.notifications.is_empty());
    }

    fn fitted(width: u32, height: u32, source: (u32, u32)) -> FittedImage {
        FittedImage {
            pixels: vec![0; (width * height * 4) as usize],
            width,
            height,
            source_width: source.0,
            source_height: source.1,
        }
    }

    #[test]
    fn cancelled_image_dialog_changes_nothing() {
        let mut app = App::default();
        let _ = app.update(Message::ImagePicked(None));

        assert!(app.preview.is_none());
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn loaded_image_becomes_preview_with_success_toast() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded {
            path: PathBuf::from("/photos/beach.jpg"),
            result: Ok(fitted(1920, 1080, (3840, 2160))),
        });

        let preview = app.preview.as_ref().expect("preview set");
        assert_eq!((preview.width, preview.height), (1920, 1080));

        let toast = app.notifications.notifications().next().expect("toast");
        assert_eq!(toast.category(), Category::Success);
        assert_eq!(
            toast.message(),
            "Opened beach.jpg at 1920x1080 (scaled down from 3840x2160)"
        );
    }

    #[test]
    fn small_image_toast_omits_scaling() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded {
            path: PathBuf::from("icon.png"),
            result: Ok(fitted(16, 16, (16, 16))),
        });

        let toast = app.notifications.notifications().next().expect("toast");
        assert_eq!(toast.message(), "Opened icon.png at 16x16");
    }

    #[test]
    fn failed_image_load_shows_error_toast_and_keeps_preview() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded {
            path: PathBuf::from("icon.png"),
            result: Ok(fitted(16, 16, (16, 16))),
        });
        let _ = app.update(Message::ImageLoaded {
            path: PathBuf::from("notes.txt"),
            result: Err(Error::UnsupportedMedia("notes.txt".into())),
        });

        assert!(app.preview.is_some());
        let last = app.notifications.notifications().last().expect("toast");
        assert_eq!(last.category(), Category::Error);
        assert_eq!(last.message(), "Not an image: notes.txt");
    }
}
