// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and the hash-style route table.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Playground,
    About,
}

impl Screen {
    /// Every screen, in navbar order.
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Playground, Screen::About];

    /// Canonical route for this screen, e.g. `#/about`.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Screen::Home => "#/",
            Screen::Playground => "#/playground",
            Screen::About => "#/about",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Playground => "Playground",
            Screen::About => "About",
        }
    }

    /// Parses a route.
    ///
    /// The leading `#` and `/` and a trailing `/` are optional, so `#/about`,
    /// `/about/` and `about` all resolve to [`Screen::About`]. An empty route
    /// is the home screen.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Screen> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let segment = trimmed.trim_matches('/');

        Screen::ALL
            .into_iter()
            .find(|screen| screen.path().trim_start_matches('#').trim_matches('/') == segment)
    }
}
