// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - the `--config-dir` flag or a test directory
//! 2. **Environment variable** - `TOASTLINE_CONFIG_DIR` (if non-empty)
//! 3. **Platform default** - via the `dirs` crate, with the app name appended
//!    - Linux: `~/.config/Toastline/`
//!    - macOS: `~/Library/Application Support/Toastline/`
//!    - Windows: `C:\Users\<User>\AppData\Roaming\Toastline\`

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "Toastline";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TOASTLINE_CONFIG_DIR";

/// Returns the application config directory.
///
/// Returns `None` only if no platform config directory exists.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(
        override_path,
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

/// Applies the resolution order to already gathered candidates.
fn resolve_dir(
    override_path: Option<PathBuf>,
    env_value: Option<String>,
    platform_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(value) = env_value.filter(|value| !value.trim().is_empty()) {
        return Some(PathBuf::from(value));
    }

    platform_dir.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let resolved = resolve_dir(
            Some(PathBuf::from("/explicit")),
            Some("/from-env".to_string()),
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/explicit")));
    }

    #[test]
    fn env_value_beats_platform_default() {
        let resolved = resolve_dir(
            None,
            Some("/from-env".to_string()),
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/from-env")));
    }

    #[test]
    fn blank_env_value_is_ignored() {
        let resolved = resolve_dir(None, Some("  ".to_string()), Some(PathBuf::from("/platform")));
        assert_eq!(resolved, Some(PathBuf::from("/platform").join(APP_NAME)));
    }

    #[test]
    fn nothing_available_yields_none() {
        assert_eq!(resolve_dir(None, None, None), None);
    }
}
