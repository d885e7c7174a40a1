// SPDX-License-Identifier: MPL-2.0
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;
use toastline::config::{
    self, Config, FontsConfig, NotificationsConfig, DEFAULT_NOTIFICATION_DURATION_MS,
    MAX_NOTIFICATION_DURATION_MS,
};
use toastline::ui::theming::ThemeMode;

#[test]
fn settings_in_override_dir_are_picked_up() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        notifications: NotificationsConfig {
            default_duration_ms: Some(1500),
        },
        fonts: FontsConfig {
            files: vec![PathBuf::from("Poppins-Bold.ttf")],
        },
        ..Config::default()
    };
    config::save_to_path(&config, &dir.path().join("settings.toml"))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.notifications.default_duration(),
        Duration::from_millis(1500)
    );
}

#[test]
fn missing_settings_file_yields_defaults_silently() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (loaded, warning) = config::load_with_override(Some(dir.path().join("nested")));

    assert!(warning.is_none());
    assert_eq!(loaded, Config::default());
    assert_eq!(
        loaded.notifications.default_duration(),
        Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS)
    );
}

#[test]
fn malformed_settings_fall_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    let warning = warning.expect("warning for unreadable settings");
    assert!(warning.contains("settings.toml"));
}

#[test]
fn hand_written_settings_parse() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        r#"
[general]
theme_mode = "light"

[notifications]
default_duration_ms = 999999

[fonts]
files = ["fonts/Poppins-Regular.ttf", "fonts/Poppins-Black.ttf"]
"#,
    )
    .expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.fonts.files.len(), 2);
    assert_eq!(
        loaded.notifications.default_duration(),
        Duration::from_millis(MAX_NOTIFICATION_DURATION_MS)
    );
}
